use crate::export::FlatRecord;
use chrono::NaiveDate;

/// One row of the week extract: `weekId,YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRecord {
    pub week_id: i32,
    pub date: NaiveDate,
}

/// Row of the weeks import file: `Week <n>,YYYY-MM-DD,<seasonId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    pub number: usize,
    pub date: NaiveDate,
    pub season_id: i32,
}

impl WeekRow {
    pub const HEADER: [&'static str; 3] = ["name", "date", "season_id"];
}

impl FlatRecord for WeekRow {
    fn fields(&self) -> Vec<String> {
        vec![
            format!("Week {}", self.number),
            self.date.format("%Y-%m-%d").to_string(),
            self.season_id.to_string(),
        ]
    }
}
