pub mod dto;
pub mod series_builder;
