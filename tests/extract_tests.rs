mod common;
use common::{config_for, date, setup_files_dir, write_file, write_reference_files};
use golfimport::errors::AppError;
use golfimport::extract::codec::{TeamRecord, decode_line};
use golfimport::extract::{ReferenceData, load_team_ids, load_week_ids};
use golfimport::models::{MatchRecord, PlayerRecord, WeekRecord};

#[test]
fn test_decode_player_line() {
    let p: PlayerRecord = decode_line("2,Tom,Baker,tom.b@example.com,8.0,555-0102,20").unwrap();
    assert_eq!(p.player_id, 2);
    assert_eq!(p.last_name, "Baker");
    assert_eq!(p.handicap, 8.0);
    assert_eq!(p.team_id, 20);
}

#[test]
fn test_decode_player_line_with_empty_contact_fields() {
    let p: PlayerRecord = decode_line("9,Lee,Park,,11,,30").unwrap();
    assert_eq!(p.email, "");
    assert_eq!(p.phone, "");
    assert_eq!(p.team_id, 30);
}

#[test]
fn test_decode_rejects_wrong_column_count() {
    let err = decode_line::<MatchRecord>("100,7,10").unwrap_err();
    assert!(err.contains("expected 4 fields"), "{err}");
}

#[test]
fn test_decode_rejects_non_numeric_id() {
    let err = decode_line::<MatchRecord>("x,7,10,20").unwrap_err();
    assert!(err.contains("match id"), "{err}");
}

#[test]
fn test_decode_week_and_team() {
    let w: WeekRecord = decode_line("7,2024-05-01").unwrap();
    assert_eq!(w.week_id, 7);
    assert_eq!(w.date, date(2024, 5, 1));

    let t: TeamRecord = decode_line("3,Birdie Hunters").unwrap();
    assert_eq!(t.team_id, 3);
    assert_eq!(t.name, "Birdie Hunters");
}

#[test]
fn test_reference_data_loads_all_extracts() {
    let dir = setup_files_dir("extract_all");
    write_reference_files(&dir);
    let cfg = config_for(&dir);

    let refs = ReferenceData::load(&cfg, 2024).expect("load references");

    assert_eq!(refs.week_ids.get(&date(2024, 5, 8)), Some(&8));
    assert_eq!(refs.roster.len(), 5);
    assert_eq!(refs.roster.candidates("TOM").len(), 2);
    assert_eq!(refs.roster.candidates("tom")[0].player_id, 1);
    assert_eq!(refs.matches_by_week[&7].len(), 2);
    assert_eq!(refs.matches_by_week[&8][0].match_id, 200);
}

#[test]
fn test_missing_reference_file_fails_fast() {
    let dir = setup_files_dir("extract_missing");
    let cfg = config_for(&dir);

    let err = load_week_ids(&cfg, 1999).unwrap_err();
    assert!(matches!(err, AppError::ReferenceLoad { .. }));
    assert!(err.to_string().contains("week-extract-1999.txt"));
}

#[test]
fn test_malformed_date_reports_file_and_line() {
    let dir = setup_files_dir("extract_bad_date");
    write_file(&dir, "week-extract-2024.txt", "7,2024-05-01\n8,05/08/2024\n");
    let cfg = config_for(&dir);

    match load_week_ids(&cfg, 2024) {
        Err(AppError::ReferenceLoad { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("invalid date"), "{reason}");
        }
        other => panic!("expected ReferenceLoad, got {other:?}"),
    }
}

#[test]
fn test_team_import_file_skips_header() {
    let dir = setup_files_dir("extract_teams");
    write_file(&dir, "team-2024.txt", "id,name\n10,Eagles\n20,Hawks\n");
    let cfg = config_for(&dir);

    let teams = load_team_ids(&cfg, 2024).unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams["Hawks"], 20);
}
