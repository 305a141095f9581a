#[cfg(test)]
mod tests {
    use crate::config::{CardConfig, ChartHints};
    use crate::model::player::PlayerRecord;
    use crate::model::week_stat::WeekStat;
    use crate::repository::PlayerSource;
    use crate::usecase::player_card::*;
    use anyhow::Result;
    use chrono::{TimeZone, Utc};

    struct MockSource {
        players: Vec<PlayerRecord>,
    }

    impl PlayerSource for MockSource {
        fn list(&self) -> Result<Vec<PlayerRecord>> {
            Ok(self.players.clone())
        }
    }

    fn player(name: &str, counts: &[u64]) -> PlayerRecord {
        let mut p = PlayerRecord::new(name, "Arsenal", "Midfielder");
        p.week_stats = counts.iter().map(|&c| WeekStat::new(c)).collect();
        p
    }

    #[test]
    fn test_card_with_weekly_data() {
        let mut saka = player("Bukayo Saka", &[3, 7, 2]);
        saka.nationality = Some("England".to_string());
        saka.fantasy_price = Some(9.0);
        saka.fantasy_selection_percentage = Some(33.3);
        saka.photo_url = Some("223340.png".to_string());

        let source = MockSource { players: vec![saka] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());

        let view = usecase.card_for("bukayo saka").unwrap().unwrap();
        assert_eq!(view.series.labels(), ["Gameweek 1", "Gameweek 2", "Gameweek 3"]);
        assert_eq!(view.series.values(), [3, 7, 2]);
        assert_eq!(view.current, Some(WeekStat::new(2)));
        assert!(view.has_chart_data());
        assert_eq!(view.hints, ChartHints::DEFAULT);
        assert!(view.photo.as_deref().unwrap().ends_with("p223340.png"));

        assert_eq!(view.attribute(LABEL_CLUB), Some("Arsenal"));
        assert_eq!(view.attribute(LABEL_NATIONALITY), Some("England"));
        assert_eq!(view.attribute(LABEL_PRICE), Some("9.0"));
        assert_eq!(view.attribute(LABEL_SELECTION_PCT), Some("33.3%"));
        assert_eq!(view.attribute(LABEL_CURRENT_SELECTIONS), Some("2"));
    }

    #[test]
    fn test_card_without_weekly_data_degrades() {
        let source = MockSource { players: vec![player("New Signing", &[])] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());

        let view = usecase.card_for("New Signing").unwrap().unwrap();
        assert!(!view.has_chart_data());
        assert!(view.series.labels().is_empty());
        assert_eq!(view.current, None);
        assert_eq!(view.attribute(LABEL_CURRENT_SELECTIONS), Some("—"));
        assert_eq!(view.attribute(LABEL_NATIONALITY), Some("—"));
        assert_eq!(view.attribute(LABEL_PRICE), Some("—"));
        assert_eq!(view.photo, None);
    }

    #[test]
    fn test_configured_placeholder() {
        let source = MockSource { players: vec![player("A", &[])] };
        let mut config = CardConfig::default();
        config.display.placeholder = "n/a".to_string();
        let mut usecase = PlayerCardUseCase::new(&source, &config);

        let view = usecase.card_for("A").unwrap().unwrap();
        assert_eq!(view.attribute(LABEL_CURRENT_SELECTIONS), Some("n/a"));
    }

    #[test]
    fn test_unknown_player() {
        let source = MockSource { players: vec![player("A", &[1])] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());
        assert!(usecase.card_for("B").unwrap().is_none());
        assert_eq!(usecase.player_names().unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn test_switching_players_tracks_latest() {
        let a = player("A", &[1, 2]);
        let b = player("B", &[5]);
        let source = MockSource { players: vec![a.clone(), b.clone()] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());

        assert_eq!(usecase.build_view(&a).series.values(), [1, 2]);
        assert_eq!(usecase.build_view(&a).series.values(), [1, 2]);
        assert_eq!(usecase.rebuilds(), 1);

        assert_eq!(usecase.build_view(&b).series.values(), [5]);
        assert_eq!(usecase.build_view(&a).series.values(), [1, 2]);
        assert_eq!(usecase.rebuilds(), 3);
    }

    #[test]
    fn test_out_of_order_weeks_still_render() {
        let mut p = player("A", &[4, 6]);
        p.week_stats[0].game_week = Some(2);
        p.week_stats[1].game_week = Some(1);
        let source = MockSource { players: vec![] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());

        let view = usecase.build_view(&p);
        assert_eq!(view.series.labels(), ["Gameweek 1", "Gameweek 2"]);
        assert_eq!(view.series.values(), [4, 6]);
    }

    #[test]
    fn test_news_line() {
        let mut p = player("A", &[1]);
        p.fantasy_news = Some("Hamstring injury".to_string());
        p.fantasy_news_timestamp = Some(Utc.with_ymd_and_hms(2019, 9, 20, 12, 30, 0).unwrap());
        let source = MockSource { players: vec![] };
        let mut usecase = PlayerCardUseCase::new(&source, &CardConfig::default());

        assert_eq!(usecase.build_view(&p).news.as_deref(), Some("Hamstring injury (2019-09-20)"));

        p.fantasy_news_timestamp = None;
        assert_eq!(usecase.build_view(&p).news.as_deref(), Some("Hamstring injury"));

        p.fantasy_news = Some("  ".to_string());
        assert_eq!(usecase.build_view(&p).news, None);
    }

    #[test]
    fn test_attribute_rows_order() {
        let p = player("A", &[1]);
        let rows = attribute_rows(&p, p.week_stats.last(), "-");
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                LABEL_NAME,
                LABEL_CLUB,
                LABEL_NATIONALITY,
                LABEL_POSITION,
                LABEL_PRICE,
                LABEL_SELECTION_PCT,
                LABEL_CURRENT_SELECTIONS,
            ]
        );
    }
}
