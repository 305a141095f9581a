pub mod player;
pub mod series;
pub mod week_stat;
