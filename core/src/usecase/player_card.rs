use anyhow::Result;
use tracing::{debug, warn};

use crate::config::{CardConfig, ChartHints};
use crate::model::player::PlayerRecord;
use crate::model::week_stat::WeekStat;
use crate::repository::PlayerSource;
use crate::service::dto::{AttributeRow, PlayerCardView};
use crate::service::series_builder::{current_week_stat, validate_week_order};
use crate::usecase::series_cache::SeriesCache;

pub const LABEL_NAME: &str = "Name";
pub const LABEL_CLUB: &str = "Club";
pub const LABEL_NATIONALITY: &str = "Nationality";
pub const LABEL_POSITION: &str = "Position";
pub const LABEL_PRICE: &str = "Fantasy price";
pub const LABEL_SELECTION_PCT: &str = "Fantasy selection %";
pub const LABEL_CURRENT_SELECTIONS: &str = "Selections this week";

pub struct PlayerCardUseCase<'a, S: PlayerSource> {
    source: &'a S,
    cache: SeriesCache,
    placeholder: String,
    hints: ChartHints,
}

impl<'a, S: PlayerSource> PlayerCardUseCase<'a, S> {
    pub fn new(source: &'a S, config: &CardConfig) -> Self {
        Self {
            source,
            cache: SeriesCache::new(),
            placeholder: config.display.placeholder.clone(),
            hints: config.chart_hints(),
        }
    }

    pub fn player_names(&self) -> Result<Vec<String>> {
        Ok(self.source.list()?.into_iter().map(|p| p.name).collect())
    }

    pub fn card_for(&mut self, name: &str) -> Result<Option<PlayerCardView>> {
        Ok(self.source.find(name)?.map(|player| self.build_view(&player)))
    }

    pub fn build_view(&mut self, player: &PlayerRecord) -> PlayerCardView {
        if let Err(err) = validate_week_order(&player.week_stats) {
            warn!(player = %player.name, %err, "week stats are not in game week order");
        }

        let current = current_week_stat(&player.week_stats).ok().cloned();
        if current.is_none() {
            debug!(player = %player.name, "no weekly data");
        }

        let attributes = attribute_rows(player, current.as_ref(), &self.placeholder);
        let series = self.cache.get_or_build(&player.week_stats).clone();

        PlayerCardView {
            name: player.name.clone(),
            photo: player.photo_link(),
            news: news_line(player),
            attributes,
            current,
            series,
            hints: self.hints,
        }
    }

    pub fn rebuilds(&self) -> usize {
        self.cache.rebuilds()
    }
}

fn news_line(player: &PlayerRecord) -> Option<String> {
    let news = player.fantasy_news.as_deref().filter(|n| !n.trim().is_empty())?;
    Some(match player.fantasy_news_timestamp {
        Some(ts) => format!("{} ({})", news, ts.format("%Y-%m-%d")),
        None => news.to_string(),
    })
}

pub fn attribute_rows(player: &PlayerRecord, current: Option<&WeekStat>, placeholder: &str) -> Vec<AttributeRow> {
    let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| placeholder.to_string());

    vec![
        AttributeRow::new(LABEL_NAME, player.name.clone()),
        AttributeRow::new(LABEL_CLUB, player.team.clone()),
        AttributeRow::new(LABEL_NATIONALITY, or_placeholder(player.nationality.clone())),
        AttributeRow::new(LABEL_POSITION, player.position.clone()),
        AttributeRow::new(LABEL_PRICE, or_placeholder(player.fantasy_price.map(|p| format!("{:.1}", p)))),
        AttributeRow::new(
            LABEL_SELECTION_PCT,
            or_placeholder(player.fantasy_selection_percentage.map(|p| format!("{:.1}%", p))),
        ),
        AttributeRow::new(
            LABEL_CURRENT_SELECTIONS,
            or_placeholder(current.map(|w| w.fantasy_selection_count.to_string())),
        ),
    ]
}
