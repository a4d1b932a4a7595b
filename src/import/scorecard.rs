use crate::config::{Config, ScorecardColumns};
use crate::models::{MatchPlayers, RawRoundEntry};
use crate::utils::date::date_from_sheet_name;
use crate::workbook::{Row, Sheet, Workbook};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// round date → sealed foursomes played that day
pub type SeasonMatches = BTreeMap<NaiveDate, Vec<MatchPlayers>>;

const PLACEHOLDER_NAMES: [&str; 2] = ["player 1", "player 2"];

/// A scorecard row with a player name and a numeric handicap.
pub fn round_entry(row: Row<'_>, cols: &ScorecardColumns) -> Option<RawRoundEntry> {
    let name = row.text(cols.name)?.trim();
    if name.is_empty() || PLACEHOLDER_NAMES.iter().any(|p| name.eq_ignore_ascii_case(p)) {
        return None;
    }

    let handicap = row.number(cols.handicap)?;
    let mut entry = RawRoundEntry::new(name, handicap as i32);
    if let Some(team_id) = row.number(cols.team_override) {
        entry = entry.with_team(team_id as i32);
    }

    Some(entry)
}

/// Group the rows of one round sheet into foursomes.
///
/// Only full groups are returned; entries left in an open trailing group
/// are reported and dropped.
pub fn extract_sheet(sheet: &Sheet, cols: &ScorecardColumns) -> Vec<MatchPlayers> {
    let mut matches = Vec::new();
    let mut current = MatchPlayers::default();

    for entry in sheet.rows().filter_map(|row| round_entry(row, cols)) {
        current.players.push(entry);
        if current.is_full() {
            matches.push(std::mem::take(&mut current));
        }
    }

    if !current.players.is_empty() {
        warn!(
            sheet = %sheet.name,
            players = current.players.len(),
            "incomplete foursome at end of sheet ignored"
        );
    }

    matches
}

/// Scan every sheet whose name is a `YY-M-D` round date.
pub fn extract_scorecards(workbook: &Workbook, cfg: &Config) -> SeasonMatches {
    let mut season = SeasonMatches::new();

    for sheet in &workbook.sheets {
        let Some(date) = date_from_sheet_name(&sheet.name) else {
            debug!(sheet = %sheet.name, "not a round sheet, skipped");
            continue;
        };

        let matches = extract_sheet(sheet, &cfg.scorecard_columns);
        debug!(%date, matches = matches.len(), "round sheet extracted");

        if season.insert(date, matches).is_some() {
            warn!(%date, sheet = %sheet.name, "round date appears twice, later sheet wins");
        }
    }

    season
}
