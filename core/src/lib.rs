pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::{CardConfig, ChartHints};
pub use error::{ConfigError, SeriesError};
pub use input::{parse_player_record, parse_players};
pub use model::player::PlayerRecord;
pub use model::series::{Metric, NamedSeries};
pub use model::week_stat::WeekStat;
pub use repository::{FilePlayerSource, PlayerSource};
pub use service::dto::{AttributeRow, PlayerCardView};
pub use service::series_builder::{
    build_metric_series, build_selection_series, current_week_stat, gameweek_label, validate_week_order,
};
pub use usecase::player_card::PlayerCardUseCase;
pub use usecase::series_cache::SeriesCache;
