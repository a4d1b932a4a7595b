mod common;
use common::{config_for, date, setup_files_dir, write_reference_files};
use golfimport::core::rounds::materialize_rounds;
use golfimport::extract::ReferenceData;
use golfimport::import::SeasonMatches;
use golfimport::models::{MatchPlayers, RawRoundEntry, Round};
use std::collections::BTreeMap;

fn foursome(entries: Vec<RawRoundEntry>) -> MatchPlayers {
    MatchPlayers { players: entries }
}

fn references(name: &str) -> (ReferenceData, BTreeMap<String, String>) {
    let dir = setup_files_dir(name);
    write_reference_files(&dir);
    let cfg = config_for(&dir);
    (ReferenceData::load(&cfg, 2024).unwrap(), cfg.name_aliases)
}

#[test]
fn test_resolution_error_does_not_stop_other_players() {
    let (refs, aliases) = references("rounds_isolation");
    let season = SeasonMatches::from([(
        date(2024, 5, 1),
        vec![foursome(vec![
            RawRoundEntry::new("Tom B", 9),
            RawRoundEntry::new("Nobody", 5),
        ])],
    )]);

    let result = materialize_rounds(&season, &refs, &aliases);

    assert_eq!(result.rounds.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Nobody"), "{}", result.errors[0]);
    assert!(result.errors[0].contains("2024-05-01"), "{}", result.errors[0]);
    assert!(!result.is_clean());
}

#[test]
fn test_round_uses_roster_team_and_card_handicap() {
    let (refs, aliases) = references("rounds_roster_team");
    let season = SeasonMatches::from([(
        date(2024, 5, 1),
        vec![foursome(vec![RawRoundEntry::new("Tom B", 9)])],
    )]);

    let result = materialize_rounds(&season, &refs, &aliases);

    assert!(result.is_clean(), "{:?}", result.errors);
    assert_eq!(
        result.rounds,
        vec![Round {
            player_id: 2,
            match_id: 100,
            team_id: 20,
            handicap: 9.0
        }]
    );
}

#[test]
fn test_positive_team_override_selects_other_match() {
    let (refs, aliases) = references("rounds_override");
    let season = SeasonMatches::from([(
        date(2024, 5, 1),
        vec![foursome(vec![
            RawRoundEntry::new("Tom A", 12).with_team(30),
            RawRoundEntry::new("Sara", 20).with_team(0),
        ])],
    )]);

    let result = materialize_rounds(&season, &refs, &aliases);

    assert!(result.is_clean(), "{:?}", result.errors);
    assert_eq!(result.rounds[0].team_id, 30);
    assert_eq!(result.rounds[0].match_id, 101);
    // zero is not an override
    assert_eq!(result.rounds[1].team_id, 20);
}

#[test]
fn test_dates_missing_from_week_extract_are_skipped() {
    let (refs, aliases) = references("rounds_unknown_date");
    let season = SeasonMatches::from([(
        date(2023, 9, 1),
        vec![foursome(vec![RawRoundEntry::new("Nobody", 5)])],
    )]);

    let result = materialize_rounds(&season, &refs, &aliases);
    assert!(result.rounds.is_empty());
    assert!(result.is_clean());
}

#[test]
fn test_team_without_match_that_week_is_match_not_found() {
    let (refs, aliases) = references("rounds_no_match");
    // Tom A plays for team 10, which has no match in week 8
    let season = SeasonMatches::from([(
        date(2024, 5, 8),
        vec![foursome(vec![RawRoundEntry::new("Tom A", 12)])],
    )]);

    let result = materialize_rounds(&season, &refs, &aliases);
    assert!(result.rounds.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("teamId: 10"), "{}", result.errors[0]);
}

#[test]
fn test_rounds_follow_date_then_card_order() {
    let (refs, aliases) = references("rounds_order");
    let season = SeasonMatches::from([
        (
            date(2024, 5, 8),
            vec![foursome(vec![RawRoundEntry::new("Sara", 20)])],
        ),
        (
            date(2024, 5, 1),
            vec![foursome(vec![
                RawRoundEntry::new("Ann", 18),
                RawRoundEntry::new("Baby", 15),
            ])],
        ),
    ]);

    let result = materialize_rounds(&season, &refs, &aliases);
    let ids: Vec<i32> = result.rounds.iter().map(|r| r.player_id).collect();
    assert_eq!(ids, vec![5, 3, 4]);
}
