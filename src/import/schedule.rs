use crate::config::{Config, ScheduleColumns};
use crate::errors::{AppError, AppResult};
use crate::models::TwoTeam;
use crate::utils::date::{excel_serial_to_date, in_season, tee_time_key};
use crate::workbook::{Row, Sheet, Workbook};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// week id → (tee-time key → paired teams)
pub type WeekMatchups = BTreeMap<i32, BTreeMap<String, TwoTeam>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAtTeeTime {
    pub team_name: String,
    pub tee_time: String,
}

/// Date marker in the first cell of a row, if it is an in-season date.
pub fn week_date(row: Row<'_>, min_season_year: i32) -> Option<NaiveDate> {
    let date = excel_serial_to_date(row.number(0)?)?;
    in_season(date, min_season_year).then_some(date)
}

/// Team name (text) followed by a numeric time of day.
pub fn team_at_tee_time(row: Row<'_>, cols: &ScheduleColumns) -> Option<TeamAtTeeTime> {
    let team_name = row.text(cols.team_name)?;
    let tee_time = tee_time_key(row.number(cols.tee_time)?)?;
    Some(TeamAtTeeTime {
        team_name: team_name.to_string(),
        tee_time,
    })
}

fn matchups_sheet<'a>(workbook: &'a Workbook, cfg: &Config) -> AppResult<&'a Sheet> {
    workbook
        .sheet(&cfg.weekly_matchups_sheet)
        .ok_or_else(|| AppError::MissingSheet(cfg.weekly_matchups_sheet.clone()))
}

/// Every in-season date marker on the matchups sheet, sorted ascending.
pub fn collect_week_dates(workbook: &Workbook, cfg: &Config) -> AppResult<Vec<NaiveDate>> {
    let sheet = matchups_sheet(workbook, cfg)?;
    let mut dates: Vec<NaiveDate> = sheet
        .rows()
        .filter_map(|row| week_date(row, cfg.min_season_year))
        .collect();

    debug!("Found {} dates", dates.len());
    dates.sort();
    Ok(dates)
}

/// Groups tee times into buckets; a bucket is closed once it holds
/// `expected` tee times and every one of them is paired.
///
/// Several weeks may point at the same bucket while it is open. A week is
/// pointed at a new bucket only by the row after the reset, so a closed
/// bucket stays with its week until then.
#[derive(Debug)]
pub struct TeeTimeAccumulator {
    expected: usize,
    buckets: Vec<BTreeMap<String, TwoTeam>>,
    bucket_of_week: BTreeMap<i32, usize>,
}

impl TeeTimeAccumulator {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            buckets: vec![BTreeMap::new()],
            bucket_of_week: BTreeMap::new(),
        }
    }

    fn current_saturated(&self) -> bool {
        self.buckets.last().is_some_and(|bucket| {
            self.expected > 0
                && bucket.len() == self.expected
                && bucket.values().all(TwoTeam::is_full)
        })
    }

    pub fn add(&mut self, week_id: i32, team: TeamAtTeeTime) {
        self.bucket_of_week.insert(week_id, self.buckets.len() - 1);

        if self.current_saturated() {
            self.buckets.push(BTreeMap::new());
        }

        let idx = self.buckets.len() - 1;
        self.buckets[idx]
            .entry(team.tee_time)
            .or_default()
            .add_team(&team.team_name);
    }

    pub fn finish(self) -> WeekMatchups {
        self.bucket_of_week
            .into_iter()
            .map(|(week_id, idx)| (week_id, self.buckets[idx].clone()))
            .collect()
    }
}

/// Pair the teams of the matchups sheet by week and tee time.
pub fn extract_matchups(
    workbook: &Workbook,
    week_ids: &BTreeMap<NaiveDate, i32>,
    cfg: &Config,
) -> AppResult<WeekMatchups> {
    let sheet = matchups_sheet(workbook, cfg)?;
    let mut acc = TeeTimeAccumulator::new(cfg.expected_tee_times);
    let mut week_id: Option<i32> = None;

    for (idx, row) in sheet.rows().enumerate() {
        if let Some(date) = week_date(row, cfg.min_season_year) {
            week_id = week_ids.get(&date).copied();
            if week_id.is_none() {
                warn!(%date, "date is not on the week extract");
            }
        }

        let Some(team) = team_at_tee_time(row, &cfg.schedule_columns) else {
            continue;
        };

        match week_id {
            Some(id) => acc.add(id, team),
            None => warn!(
                row = idx + 1,
                team = %team.team_name,
                "team row has no known week, skipped"
            ),
        }
    }

    Ok(acc.finish())
}
