use super::ImportReport;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::write_flat_file;
use crate::import::collect_week_dates;
use crate::models::WeekRow;
use crate::utils::path::existing_source;
use crate::workbook::{Workbook, open_workbook};
use std::path::PathBuf;
use tracing::info;

pub fn weeks_import_file(cfg: &Config, year: i32, season_id: i32) -> PathBuf {
    cfg.file_path(&format!("week-{year}-{season_id}.txt"))
}

/// Number the season's date markers in date order.
pub fn week_rows(workbook: &Workbook, cfg: &Config, season_id: i32) -> AppResult<Vec<WeekRow>> {
    let rows = collect_week_dates(workbook, cfg)?
        .into_iter()
        .enumerate()
        .map(|(idx, date)| WeekRow {
            number: idx + 1,
            date,
            season_id,
        })
        .collect();
    Ok(rows)
}

pub struct WeeksLogic;

impl WeeksLogic {
    pub fn import(cfg: &Config, file: &str, season_id: i32, year: i32) -> AppResult<ImportReport> {
        let workbook = open_workbook(&existing_source(file)?)?;
        let rows = week_rows(&workbook, cfg, season_id)?;

        let path = weeks_import_file(cfg, year, season_id);
        write_flat_file(&path, &WeekRow::HEADER, &rows)?;
        info!(path = %path.display(), rows = rows.len(), season_id, "weeks import written");

        Ok(ImportReport {
            path,
            rows: rows.len(),
        })
    }
}
