//! JSON decoding for player records.
//!
//! Week stats are decoded one at a time so a bad week is reported by index
//! instead of as a byte offset into the whole document.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SeriesError;
use crate::model::player::PlayerRecord;
use crate::model::week_stat::WeekStat;

pub fn parse_player_record(json: &str) -> Result<PlayerRecord, SeriesError> {
    let value: Value = serde_json::from_str(json).map_err(|e| SeriesError::MalformedRecord(e.to_string()))?;
    player_from_value(value)
}

pub fn parse_players(json: &str) -> Result<Vec<PlayerRecord>, SeriesError> {
    let value: Value = serde_json::from_str(json).map_err(|e| SeriesError::MalformedRecord(e.to_string()))?;
    match value {
        Value::Array(items) => items.into_iter().map(player_from_value).collect(),
        other => Err(SeriesError::MalformedRecord(format!(
            "expected an array of players, found {}",
            json_kind(&other)
        ))),
    }
}

fn player_from_value(mut value: Value) -> Result<PlayerRecord, SeriesError> {
    let raw_weeks = match value.as_object_mut() {
        Some(map) => map.remove("week_stats"),
        None => {
            return Err(SeriesError::MalformedRecord(format!(
                "expected a player object, found {}",
                json_kind(&value)
            )))
        }
    };

    let mut player = PlayerRecord::deserialize(value).map_err(|e| SeriesError::MalformedRecord(e.to_string()))?;
    player.week_stats = match raw_weeks {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => parse_week_stats(items)?,
        Some(other) => {
            return Err(SeriesError::MalformedRecord(format!(
                "week_stats must be an array, found {}",
                json_kind(&other)
            )))
        }
    };
    Ok(player)
}

fn parse_week_stats(items: Vec<Value>) -> Result<Vec<WeekStat>, SeriesError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            WeekStat::deserialize(item).map_err(|e| SeriesError::MalformedInput {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_record() {
        let json = r#"{
            "name": "Mohamed Salah",
            "team": "Liverpool",
            "nationality": "Egypt",
            "position": "Midfielder",
            "fantasy_price": 12.5,
            "fantasy_selection_percentage": 41.2,
            "photo_url": "118748.png",
            "week_stats": [
                {"fantasy_selection_count": 3, "game_week": 1},
                {"fantasy_selection_count": 7, "transfers_in": 120}
            ]
        }"#;
        let player = parse_player_record(json).unwrap();
        assert_eq!(player.name, "Mohamed Salah");
        assert_eq!(player.week_stats.len(), 2);
        assert_eq!(player.week_stats[0].game_week, Some(1));
        assert_eq!(player.week_stats[1].transfers_in, Some(120));
    }

    #[test]
    fn test_missing_selection_count_names_week() {
        let json = r#"{
            "name": "X", "team": "Y", "position": "Z",
            "week_stats": [{"fantasy_selection_count": 1}, {"week_points": 4}]
        }"#;
        match parse_player_record(json) {
            Err(SeriesError::MalformedInput { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("fantasy_selection_count"), "reason was: {}", reason);
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_selection_count() {
        let json = r#"{
            "name": "X", "team": "Y", "position": "Z",
            "week_stats": [{"fantasy_selection_count": "lots"}]
        }"#;
        assert!(matches!(
            parse_player_record(json),
            Err(SeriesError::MalformedInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_negative_selection_count_rejected() {
        let json = r#"{
            "name": "X", "team": "Y", "position": "Z",
            "week_stats": [{"fantasy_selection_count": -4}]
        }"#;
        assert!(matches!(
            parse_player_record(json),
            Err(SeriesError::MalformedInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_week_stats_is_empty() {
        let player = parse_player_record(r#"{"name": "X", "team": "Y", "position": "Z"}"#).unwrap();
        assert!(player.week_stats.is_empty());

        let player = parse_player_record(r#"{"name": "X", "team": "Y", "position": "Z", "week_stats": null}"#).unwrap();
        assert!(player.week_stats.is_empty());
    }

    #[test]
    fn test_malformed_record() {
        assert!(matches!(parse_player_record("[]"), Err(SeriesError::MalformedRecord(_))));
        assert!(matches!(
            parse_player_record(r#"{"team": "Y", "position": "Z"}"#),
            Err(SeriesError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_player_record(r#"{"name": "X", "team": "Y", "position": "Z", "week_stats": 3}"#),
            Err(SeriesError::MalformedRecord(_))
        ));
        assert!(matches!(parse_player_record("not json"), Err(SeriesError::MalformedRecord(_))));
    }

    #[test]
    fn test_parse_players() {
        let json = r#"[
            {"name": "A", "team": "T", "position": "P"},
            {"name": "B", "team": "T", "position": "P", "week_stats": [{"fantasy_selection_count": 9}]}
        ]"#;
        let players = parse_players(json).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].week_stats[0].fantasy_selection_count, 9);

        assert!(matches!(parse_players("{}"), Err(SeriesError::MalformedRecord(_))));
    }
}
