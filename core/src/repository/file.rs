use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::input::parse_players;
use crate::model::player::PlayerRecord;
use crate::repository::traits::PlayerSource;

/// Read-only source backed by a JSON array of player records.
#[derive(Clone)]
pub struct FilePlayerSource {
    file_path: PathBuf,
}

impl FilePlayerSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PlayerSource for FilePlayerSource {
    fn list(&self) -> Result<Vec<PlayerRecord>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("could not read players from {}", self.file_path.display()))?;
        let players = parse_players(&content)
            .with_context(|| format!("invalid player data in {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = players.len(), "loaded players");
        Ok(players)
    }
}
