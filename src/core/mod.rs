pub mod matchups;
pub mod resolve;
pub mod rounds;
pub mod weeks;

use std::path::PathBuf;

/// What an import wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub rows: usize,
}
