use tracing::debug;

use crate::model::series::NamedSeries;
use crate::model::week_stat::WeekStat;
use crate::service::series_builder::build_selection_series;

/// Remembers the last `(week_stats, series)` pair so an unchanged player
/// does not rebuild its series on every redraw.
///
/// The cache holds exactly one entry and every call replaces it, so the
/// returned series always belongs to the most recent input.
#[derive(Debug, Default)]
pub struct SeriesCache {
    last: Option<(Vec<WeekStat>, NamedSeries)>,
    rebuilds: usize,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, week_stats: &[WeekStat]) -> &NamedSeries {
        let hit = matches!(&self.last, Some((input, _)) if input.as_slice() == week_stats);
        if !hit {
            self.last = None;
            self.rebuilds += 1;
            debug!(weeks = week_stats.len(), rebuilds = self.rebuilds, "rebuilding selection series");
        }

        let (_, series) = self
            .last
            .get_or_insert_with(|| (week_stats.to_vec(), build_selection_series(week_stats)));
        series
    }

    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
