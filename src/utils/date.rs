use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static SHEET_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));

/// Interpret an Excel serial (1900 date system) as a date-time.
///
/// Serial 0 is 1899-12-30; the fractional part is the time of day.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let secs = (serial.fract() * 86400.0).round() as i64;

    epoch
        .checked_add_signed(Duration::try_days(days)?)?
        .checked_add_signed(Duration::try_seconds(secs)?)
}

/// Date part of an Excel serial.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    excel_serial_to_datetime(serial).map(|dt| dt.date())
}

/// Tee-time key for an Excel time serial: 12-hour clock, `hh:mm`.
pub fn tee_time_key(serial: f64) -> Option<String> {
    excel_serial_to_datetime(serial).map(|dt| dt.format("%I:%M").to_string())
}

/// True when the date belongs to a real season (not a template placeholder).
pub fn in_season(date: NaiveDate, min_year: i32) -> bool {
    date.year() > min_year
}

/// Parse a scorecard sheet name of the form `YY-M-D` (e.g. `24-8-1`).
///
/// Anything else (summary tabs, invalid calendar dates) yields `None`.
pub fn date_from_sheet_name(name: &str) -> Option<NaiveDate> {
    let caps = SHEET_DATE.captures(name.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
