use super::FlatRecord;
use crate::errors::AppResult;
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `header` followed by `rows` to `path`, replacing any existing file.
///
/// Records are comma separated and terminated by `\n`.
pub fn write_flat_file<R: FlatRecord>(path: &Path, header: &[&str], rows: &[R]) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }

    wtr.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "flat file written");
    Ok(())
}
