use serde::{Deserialize, Serialize};

/// One game week of a player's fantasy standing.
///
/// The position of a `WeekStat` inside `PlayerRecord::week_stats` is what
/// labels it on the chart; `game_week` is only used to check that the
/// positional order matches the upstream week numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WeekStat {
    pub fantasy_selection_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_week: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers_out: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fantasy_price: Option<f64>,
}

impl WeekStat {
    pub fn new(fantasy_selection_count: u64) -> Self {
        Self {
            fantasy_selection_count,
            ..Default::default()
        }
    }

    pub fn with_game_week(mut self, game_week: u32) -> Self {
        self.game_week = Some(game_week);
        self
    }
}
