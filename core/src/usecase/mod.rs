pub mod player_card;
pub mod series_cache;

mod player_card_test;
