use super::ImportReport;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::write_flat_file;
use crate::extract::{load_team_ids, load_week_ids};
use crate::import::{WeekMatchups, extract_matchups};
use crate::models::MatchupRow;
use crate::utils::path::existing_source;
use crate::workbook::open_workbook;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

pub fn matchups_import_file(cfg: &Config, year: i32) -> PathBuf {
    cfg.file_path(&format!("match-{year}.txt"))
}

fn team_id(team_ids: &HashMap<String, i32>, name: &str) -> AppResult<i32> {
    team_ids
        .get(name)
        .copied()
        .ok_or_else(|| AppError::UnknownTeam(name.to_string()))
}

/// Key the paired teams by their ids, in week then tee-time order.
///
/// A tee time that never got its second team produces no row.
pub fn matchup_rows(
    matchups: &WeekMatchups,
    team_ids: &HashMap<String, i32>,
) -> AppResult<Vec<MatchupRow>> {
    let mut rows = Vec::new();

    for (&week_id, tee_times) in matchups {
        for (tee_time, pair) in tee_times {
            let (Some(team1), Some(team2)) = (pair.team1.as_deref(), pair.team2.as_deref()) else {
                warn!(week_id, %tee_time, "tee time has a single team, skipped");
                continue;
            };

            rows.push(MatchupRow {
                week_id,
                team1_id: team_id(team_ids, team1)?,
                team2_id: team_id(team_ids, team2)?,
            });
        }
    }

    Ok(rows)
}

pub struct MatchupsLogic;

impl MatchupsLogic {
    pub fn import(cfg: &Config, file: &str, year: i32) -> AppResult<ImportReport> {
        let source = existing_source(file)?;
        let team_ids = load_team_ids(cfg, year)?;
        let week_ids = load_week_ids(cfg, year)?;

        let workbook = open_workbook(&source)?;
        let matchups = extract_matchups(&workbook, &week_ids, cfg)?;
        let rows = matchup_rows(&matchups, &team_ids)?;

        let path = matchups_import_file(cfg, year);
        write_flat_file(&path, &MatchupRow::HEADER, &rows)?;
        info!(path = %path.display(), rows = rows.len(), "matchups import written");

        Ok(ImportReport {
            path,
            rows: rows.len(),
        })
    }
}
