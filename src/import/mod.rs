//! Extraction passes over the in-memory workbook.
//!
//! Each pass keeps its accumulators local, so two runs never share state.

pub mod schedule;
pub mod scorecard;

pub use schedule::{WeekMatchups, collect_week_dates, extract_matchups};
pub use scorecard::{SeasonMatches, extract_scorecards};
