//! Weekly chart series derived from a player's week stats.
//!
//! Every function here is pure: same input, same output, no hidden state.

use crate::error::SeriesError;
use crate::model::series::{Metric, NamedSeries};
use crate::model::week_stat::WeekStat;

pub const GAMEWEEK_LABEL_PREFIX: &str = "Gameweek";

/// Label for the week at `index` (0-based). Labels are 1-based.
pub fn gameweek_label(index: usize) -> String {
    format!("{} {}", GAMEWEEK_LABEL_PREFIX, index + 1)
}

pub fn build_selection_series(week_stats: &[WeekStat]) -> NamedSeries {
    NamedSeries::from_points(
        Metric::SelectionCount.series_name(),
        week_stats
            .iter()
            .enumerate()
            .map(|(i, week)| (gameweek_label(i), week.fantasy_selection_count)),
    )
}

pub fn build_metric_series(week_stats: &[WeekStat], metric: Metric) -> Result<NamedSeries, SeriesError> {
    if metric == Metric::SelectionCount {
        return Ok(build_selection_series(week_stats));
    }

    let mut points = Vec::with_capacity(week_stats.len());
    for (index, week) in week_stats.iter().enumerate() {
        let value = metric_value(week, metric).ok_or(SeriesError::MissingMetric { index, metric })?;
        points.push((gameweek_label(index), value));
    }
    Ok(NamedSeries::from_points(metric.series_name(), points))
}

fn metric_value(week: &WeekStat, metric: Metric) -> Option<u64> {
    match metric {
        Metric::SelectionCount => Some(week.fantasy_selection_count),
        // Bars cannot go below the axis, so a points deduction charts as zero.
        Metric::WeekPoints => week.week_points.map(|p| u64::try_from(p).unwrap_or(0)),
        Metric::TransfersIn => week.transfers_in,
        Metric::TransfersOut => week.transfers_out,
    }
}

/// The most recent game week, for the single "current" value on the card.
pub fn current_week_stat(week_stats: &[WeekStat]) -> Result<&WeekStat, SeriesError> {
    week_stats.last().ok_or(SeriesError::NotAvailable)
}

/// Checks that explicit week numbers agree with the positional labels.
/// Weeks without a `game_week` are not checked.
pub fn validate_week_order(week_stats: &[WeekStat]) -> Result<(), SeriesError> {
    for (index, week) in week_stats.iter().enumerate() {
        if let Some(found) = week.game_week {
            let expected = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if found != expected {
                return Err(SeriesError::WeekOutOfOrder { index, expected, found });
            }
        }
    }
    Ok(())
}
