#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use golfimport::config::Config;
use golfimport::workbook::{Cell, Sheet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn gi() -> Command {
    cargo_bin_cmd!("golfimport")
}

/// Create an empty, unique working directory inside the system temp dir
pub fn setup_files_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_golfimport", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create files dir");
    path
}

/// Config whose files live in `dir`
pub fn config_for(dir: &Path) -> Config {
    Config {
        files_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture file");
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Excel serial (1900 system) of a date
pub fn serial(d: NaiveDate) -> f64 {
    (d - date(1899, 12, 30)).num_days() as f64
}

/// Excel serial of a time of day
pub fn time_serial(hour: u32, minute: u32) -> f64 {
    f64::from(hour * 60 + minute) / 1440.0
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn num(n: f64) -> Cell {
    Cell::Number(n)
}

/// Matchups sheet row holding only a week date marker
pub fn date_row(d: NaiveDate) -> Vec<Cell> {
    vec![num(serial(d))]
}

/// Matchups sheet row holding a team and its tee time in columns F and G
pub fn team_row(team: &str, hour: u32, minute: u32) -> Vec<Cell> {
    let mut row = vec![Cell::Empty; 5];
    row.push(text(team));
    row.push(num(time_serial(hour, minute)));
    row
}

/// Scorecard row: name, handicap and optional team override in column F
pub fn card_row(name: &str, handicap: f64, team: Option<f64>) -> Vec<Cell> {
    let mut row = vec![text(name), num(handicap)];
    if let Some(t) = team {
        row.extend([Cell::Empty, Cell::Empty, Cell::Empty, num(t)]);
    }
    row
}

pub fn sheet(name: &str, rows: Vec<Vec<Cell>>) -> Sheet {
    rows.into_iter().fold(Sheet::new(name), Sheet::with_row)
}

/// Save a workbook fixture as a real xlsx file
pub fn save_xlsx(path: &Path, sheets: &[Sheet]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for s in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(&s.name).expect("sheet name");
        for (r, row) in s.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Text(t) => {
                        ws.write_string(r, c, t).expect("write string");
                    }
                    Cell::Number(n) => {
                        ws.write_number(r, c, *n).expect("write number");
                    }
                    Cell::Bool(b) => {
                        ws.write_boolean(r, c, *b).expect("write bool");
                    }
                    Cell::Empty => {}
                }
            }
        }
    }
    workbook.save(path).expect("save xlsx");
}

pub const PLAYER_EXTRACT: &str = "\
1,Tom,Adams,tom.a@example.com,12.5,555-0101,10
2,Tom,Baker,tom.b@example.com,8.0,555-0102,20
3,Brien,Walsh,brien@example.com,15.0,555-0103,10
4,Sara,Lopez,sara@example.com,20.0,555-0104,20
5,Ann,Kim,ann@example.com,18.0,555-0105,30
";

pub const MATCH_EXTRACT: &str = "\
100,7,10,20
101,7,30,40
200,8,20,30
";

pub const WEEK_EXTRACT: &str = "\
7,2024-05-01
8,2024-05-08
";

/// Reference extracts for year 2024 used by the rounds tests
pub fn write_reference_files(dir: &Path) {
    write_file(dir, "week-extract-2024.txt", WEEK_EXTRACT);
    write_file(dir, "player-extract-2024.txt", PLAYER_EXTRACT);
    write_file(dir, "match-extract-2024.txt", MATCH_EXTRACT);
}
