// src/export/mod.rs

mod csv;

pub use self::csv::write_flat_file;

use crate::ui::messages::success;
use std::path::Path;

/// A row of an output file, already split into its fields.
pub trait FlatRecord {
    fn fields(&self) -> Vec<String>;
}

/// Common completion message for written import files.
pub(crate) fn notify_written(label: &str, rows: usize, path: &Path) {
    success(format!("{label}: {rows} row(s) written to {}", path.display()));
}
