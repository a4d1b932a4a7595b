//! Narrow line-record codec for reference extracts.
//!
//! One record per line, fields separated by `,`, fixed column count and
//! order. There is no quoting or escaping; any deviation fails the load.

use crate::errors::{AppError, AppResult};
use crate::models::{MatchRecord, PlayerRecord, WeekRecord};
use crate::utils::date::parse_date;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub trait LineRecord: Sized {
    const COLUMNS: usize;

    fn from_fields(fields: &[&str]) -> Result<Self, String>;
}

/// Split a line into exactly `T::COLUMNS` fields and decode it.
pub fn decode_line<T: LineRecord>(line: &str) -> Result<T, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != T::COLUMNS {
        return Err(format!(
            "expected {} fields, found {}",
            T::COLUMNS,
            fields.len()
        ));
    }
    T::from_fields(&fields)
}

/// Read every record of an extract file. Blank lines are ignored, lines
/// equal to `header` (if given) are skipped.
pub fn read_records<T: LineRecord>(path: &Path, header: Option<&str>) -> AppResult<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ReferenceLoad {
        file: path.to_path_buf(),
        line: 0,
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || header.is_some_and(|h| line == h) {
            continue;
        }

        let record = decode_line::<T>(line).map_err(|reason| AppError::ReferenceLoad {
            file: path.to_path_buf(),
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

fn field<N: FromStr>(raw: &str, name: &str) -> Result<N, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid {name} '{raw}'"))
}

impl LineRecord for WeekRecord {
    const COLUMNS: usize = 2;

    fn from_fields(f: &[&str]) -> Result<Self, String> {
        Ok(WeekRecord {
            week_id: field(f[0], "week id")?,
            date: parse_date(f[1]).ok_or_else(|| format!("invalid date '{}'", f[1]))?,
        })
    }
}

impl LineRecord for PlayerRecord {
    const COLUMNS: usize = 7;

    fn from_fields(f: &[&str]) -> Result<Self, String> {
        Ok(PlayerRecord {
            player_id: field(f[0], "player id")?,
            first_name: f[1].to_string(),
            last_name: f[2].to_string(),
            email: f[3].to_string(),
            handicap: field(f[4], "handicap")?,
            phone: f[5].to_string(),
            team_id: field(f[6], "team id")?,
        })
    }
}

impl LineRecord for MatchRecord {
    const COLUMNS: usize = 4;

    fn from_fields(f: &[&str]) -> Result<Self, String> {
        Ok(MatchRecord {
            match_id: field(f[0], "match id")?,
            week_id: field(f[1], "week id")?,
            team1_id: field(f[2], "team 1 id")?,
            team2_id: field(f[3], "team 2 id")?,
        })
    }
}

/// Row of the team import file (`id,name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub team_id: i32,
    pub name: String,
}

impl LineRecord for TeamRecord {
    const COLUMNS: usize = 2;

    fn from_fields(f: &[&str]) -> Result<Self, String> {
        Ok(TeamRecord {
            team_id: field(f[0], "team id")?,
            name: f[1].to_string(),
        })
    }
}
