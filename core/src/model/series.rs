use serde::Serialize;
use std::fmt;

/// Labels and values handed to a chart, always the same length.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedSeries {
    name: String,
    labels: Vec<String>,
    values: Vec<u64>,
}

impl NamedSeries {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a series from `(label, value)` pairs, which keeps both sides in step.
    pub fn from_points<I>(name: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let (labels, values) = points.into_iter().unzip();
        Self {
            name: name.into(),
            labels,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    SelectionCount,
    WeekPoints,
    TransfersIn,
    TransfersOut,
}

impl Metric {
    pub fn series_name(self) -> &'static str {
        match self {
            Metric::SelectionCount => "Fantasy selection count",
            Metric::WeekPoints => "Week points",
            Metric::TransfersIn => "Transfers in",
            Metric::TransfersOut => "Transfers out",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.series_name())
    }
}
