use super::ImportReport;
use super::resolve::{ResolveError, resolve_match, resolve_player};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::write_flat_file;
use crate::extract::ReferenceData;
use crate::import::{SeasonMatches, extract_scorecards};
use crate::models::{RawRoundEntry, Round, SeasonRoundResult};
use crate::utils::path::existing_source;
use crate::workbook::open_workbook;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn rounds_import_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("round-{year}.txt"))
}

/// Resolve one scorecard entry into a round.
fn resolve_round(
    entry: &RawRoundEntry,
    round_date: NaiveDate,
    week_id: i32,
    refs: &ReferenceData,
    aliases: &BTreeMap<String, String>,
) -> Result<Round, ResolveError> {
    let player = resolve_player(&entry.name_tokens(), &refs.roster, aliases)?;

    let team_id = match entry.team_id_for_round {
        Some(id) if id > 0 => id,
        _ => player.team_id,
    };

    let week_matches = refs
        .matches_by_week
        .get(&week_id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let matched = resolve_match(week_matches, team_id, round_date, player)?;

    Ok(Round {
        player_id: player.player_id,
        match_id: matched.match_id,
        team_id,
        handicap: f64::from(entry.handicap_on_card),
    })
}

fn describe(err: &ResolveError, round_date: NaiveDate) -> String {
    match err {
        ResolveError::PlayerNotFound { .. } => format!("{err} for round date {round_date}"),
        ResolveError::MatchNotFound { .. } => err.to_string(),
    }
}

/// Turn every foursome of the season into rounds.
///
/// Dates missing from the week extract are skipped. A player that cannot
/// be resolved adds one error and the pass moves on to the next player.
pub fn materialize_rounds(
    season: &SeasonMatches,
    refs: &ReferenceData,
    aliases: &BTreeMap<String, String>,
) -> SeasonRoundResult {
    let mut result = SeasonRoundResult::default();

    for (round_date, matches) in season {
        let Some(&week_id) = refs.week_ids.get(round_date) else {
            debug!(%round_date, "round date not on the week extract, skipped");
            continue;
        };

        for entry in matches.iter().flat_map(|m| &m.players) {
            match resolve_round(entry, *round_date, week_id, refs, aliases) {
                Ok(round) => result.rounds.push(round),
                Err(e) => result.errors.push(describe(&e, *round_date)),
            }
        }
    }

    result
}

/// Outcome of the rounds import: written, or rejected with every error.
#[derive(Debug, Clone)]
pub enum RoundsOutcome {
    Written(ImportReport),
    Rejected(Vec<String>),
}

pub struct RoundsLogic;

impl RoundsLogic {
    /// Import rounds from a scorecard workbook.
    ///
    /// The rounds file is written only when every player resolved.
    pub fn import(cfg: &Config, file: &str, year: i32) -> AppResult<RoundsOutcome> {
        let source = existing_source(file)?;
        let refs = ReferenceData::load(cfg, year)?;
        let workbook = open_workbook(&source)?;

        let season = extract_scorecards(&workbook, cfg);
        let result = materialize_rounds(&season, &refs, &cfg.name_aliases);

        if !result.is_clean() {
            return Ok(RoundsOutcome::Rejected(result.errors));
        }

        let path = rounds_import_file(cfg, year);
        write_flat_file(&path, &Round::HEADER, &result.rounds)?;
        info!(path = %path.display(), rows = result.rounds.len(), "rounds import written");

        Ok(RoundsOutcome::Written(ImportReport {
            path,
            rows: result.rounds.len(),
        }))
    }
}
