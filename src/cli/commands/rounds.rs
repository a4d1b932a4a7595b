use crate::cli::parser::ImportArgs;
use crate::config::Config;
use crate::core::rounds::{RoundsLogic, RoundsOutcome};
use crate::errors::{AppError, AppResult};
use crate::export::notify_written;
use crate::ui::messages::{error_list, header};

pub fn handle(args: &ImportArgs, cfg: &Config) -> AppResult<()> {
    match RoundsLogic::import(cfg, &args.file, args.year)? {
        RoundsOutcome::Written(report) => {
            notify_written("Rounds", report.rows, &report.path);
            Ok(())
        }
        RoundsOutcome::Rejected(errors) => {
            header("Unresolved rounds");
            error_list(&errors);
            Err(AppError::ResolutionFailed(errors.len()))
        }
    }
}
