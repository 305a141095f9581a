use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_DIR_NAME: &str = ".fantasy-card";
const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Presentation hints passed to the chart alongside the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHints {
    pub show_axis_labels: bool,
    pub show_legend: bool,
    pub bar_width: u16,
    pub bar_gap: u16,
}

impl ChartHints {
    pub const DEFAULT: ChartHints = ChartHints {
        show_axis_labels: false,
        show_legend: false,
        bar_width: 3,
        bar_gap: 1,
    };
}

impl Default for ChartHints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChartSection {
    pub show_axis_labels: bool,
    pub show_legend: bool,
    pub bar_width: u16,
    pub bar_gap: u16,
}

impl Default for ChartSection {
    fn default() -> Self {
        let hints = ChartHints::DEFAULT;
        Self {
            show_axis_labels: hints.show_axis_labels,
            show_legend: hints.show_legend,
            bar_width: hints.bar_width,
            bar_gap: hints.bar_gap,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySection {
    pub placeholder: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CardConfig {
    pub chart: ChartSection,
    pub display: DisplaySection,
    pub log: LogSection,
}

impl CardConfig {
    /// Loads `path`, or `~/.fantasy-card/config.toml` when no path is given.
    /// Only the default location may be absent; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::data_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn chart_hints(&self) -> ChartHints {
        ChartHints {
            show_axis_labels: self.chart.show_axis_labels,
            show_legend: self.chart.show_legend,
            bar_width: self.chart.bar_width.max(1),
            bar_gap: self.chart.bar_gap,
        }
    }
}
