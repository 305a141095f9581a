use serde::Serialize;

use crate::config::ChartHints;
use crate::model::series::NamedSeries;
use crate::model::week_stat::WeekStat;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttributeRow {
    pub label: &'static str,
    pub value: String,
}

impl AttributeRow {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything the card renderers need for one player, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCardView {
    pub name: String,
    pub photo: Option<String>,
    pub news: Option<String>,
    pub attributes: Vec<AttributeRow>,
    pub current: Option<WeekStat>,
    pub series: NamedSeries,
    pub hints: ChartHints,
}

impl PlayerCardView {
    pub fn has_chart_data(&self) -> bool {
        !self.series.is_empty()
    }

    pub fn attribute(&self, label: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
