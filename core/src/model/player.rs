use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::week_stat::WeekStat;

const PHOTO_BASE_URL: &str =
    "https://resources.premierleague.com/premierleague/photos/players/250x250/p";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub nationality: Option<String>,
    pub position: String,

    #[serde(default)]
    pub fantasy_price: Option<f64>,
    #[serde(default)]
    pub fantasy_selection_percentage: Option<f64>,

    /// Photo reference code, e.g. "78830.png".
    #[serde(default)]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub fantasy_news: Option<String>,
    #[serde(default)]
    pub fantasy_news_timestamp: Option<DateTime<Utc>>,

    /// Chronological, index 0 is the earliest game week.
    #[serde(default)]
    pub week_stats: Vec<WeekStat>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, team: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            nationality: None,
            position: position.into(),
            fantasy_price: None,
            fantasy_selection_percentage: None,
            photo_url: None,
            fantasy_news: None,
            fantasy_news_timestamp: None,
            week_stats: Vec::new(),
        }
    }

    pub fn photo_link(&self) -> Option<String> {
        self.photo_url
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(|code| format!("{}{}", PHOTO_BASE_URL, code))
    }
}
