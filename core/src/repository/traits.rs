use crate::model::player::PlayerRecord;
use anyhow::Result;

pub trait PlayerSource {
    fn list(&self) -> Result<Vec<PlayerRecord>>;

    fn find(&self, name: &str) -> Result<Option<PlayerRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name)))
    }
}
