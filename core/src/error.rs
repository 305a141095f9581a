use thiserror::Error;

use crate::model::series::Metric;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("no weekly data available")]
    NotAvailable,

    #[error("malformed week stat at index {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    #[error("malformed player record: {0}")]
    MalformedRecord(String),

    #[error("week stat at index {index} has no value for {metric}")]
    MissingMetric { index: usize, metric: Metric },

    #[error("week stat at index {index} is game week {found}, expected {expected}")]
    WeekOutOfOrder { index: usize, expected: u32, found: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not determine home directory")]
    NoHomeDir,
}
