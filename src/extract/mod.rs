//! Reference extracts produced by earlier load stages, keyed by season year.

pub mod codec;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{MatchRecord, PlayerRecord, WeekRecord};
use chrono::NaiveDate;
use codec::{TeamRecord, read_records};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

pub const TEAM_IMPORT_HEADER: &str = "id,name";

pub fn week_extract_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("week-extract-{year}.txt"))
}

pub fn player_extract_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("player-extract-{year}.txt"))
}

pub fn match_extract_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("match-extract-{year}.txt"))
}

pub fn team_import_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("team-{year}.txt"))
}

/// Season roster indexed by lowercase first name, in file order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_first_name: HashMap<String, Vec<PlayerRecord>>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        let mut by_first_name: HashMap<String, Vec<PlayerRecord>> = HashMap::new();
        for player in players {
            by_first_name
                .entry(player.first_name.to_lowercase())
                .or_default()
                .push(player);
        }
        Self { by_first_name }
    }

    pub fn candidates(&self, first_name: &str) -> &[PlayerRecord] {
        self.by_first_name
            .get(&first_name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_first_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_first_name.is_empty()
    }
}

pub fn load_week_ids(cfg: &Config, year: i32) -> AppResult<BTreeMap<NaiveDate, i32>> {
    let weeks: Vec<WeekRecord> = read_records(&week_extract_file(cfg, year), None)?;
    Ok(weeks.into_iter().map(|w| (w.date, w.week_id)).collect())
}

pub fn load_roster(cfg: &Config, year: i32) -> AppResult<Roster> {
    let players: Vec<PlayerRecord> = read_records(&player_extract_file(cfg, year), None)?;
    Ok(Roster::new(players))
}

pub fn load_matches_by_week(cfg: &Config, year: i32) -> AppResult<BTreeMap<i32, Vec<MatchRecord>>> {
    let matches: Vec<MatchRecord> = read_records(&match_extract_file(cfg, year), None)?;
    let mut by_week: BTreeMap<i32, Vec<MatchRecord>> = BTreeMap::new();
    for m in matches {
        by_week.entry(m.week_id).or_default().push(m);
    }
    Ok(by_week)
}

pub fn load_team_ids(cfg: &Config, year: i32) -> AppResult<HashMap<String, i32>> {
    let teams: Vec<TeamRecord> = read_records(&team_import_file(cfg, year), Some(TEAM_IMPORT_HEADER))?;
    Ok(teams.into_iter().map(|t| (t.name, t.team_id)).collect())
}

/// Everything the rounds import needs, loaded fresh for one run.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub week_ids: BTreeMap<NaiveDate, i32>,
    pub roster: Roster,
    pub matches_by_week: BTreeMap<i32, Vec<MatchRecord>>,
}

impl ReferenceData {
    pub fn load(cfg: &Config, year: i32) -> AppResult<Self> {
        let data = Self {
            week_ids: load_week_ids(cfg, year)?,
            roster: load_roster(cfg, year)?,
            matches_by_week: load_matches_by_week(cfg, year)?,
        };

        debug!(
            year,
            weeks = data.week_ids.len(),
            players = data.roster.len(),
            match_weeks = data.matches_by_week.len(),
            "reference extracts loaded"
        );

        Ok(data)
    }
}
