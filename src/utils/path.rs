//! Path utilities: expand ~, check that a source file exists.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a source file given on the command line; it must already exist.
pub fn existing_source(path: &str) -> AppResult<PathBuf> {
    let resolved = expand_tilde(path);
    if !Path::new(&resolved).exists() {
        return Err(AppError::SourceNotFound(resolved));
    }
    Ok(resolved)
}
