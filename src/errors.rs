//! Unified application error type.
//! Every fatal condition (missing workbook, broken reference extract, bad
//! configuration) is an `AppError`; per-player resolution failures live in
//! `core::resolve::ResolveError` and never abort a run on their own.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Output write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    // ---------------------------
    // Workbook errors
    // ---------------------------
    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),

    // ---------------------------
    // Reference extracts
    // ---------------------------
    #[error("Invalid reference file {}: line {line}: {reason}", .file.display())]
    ReferenceLoad {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Team '{0}' is not on the team import file")]
    UnknownTeam(String),

    // ---------------------------
    // Rounds
    // ---------------------------
    #[error("{0} round(s) could not be resolved, nothing written")]
    ResolutionFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
