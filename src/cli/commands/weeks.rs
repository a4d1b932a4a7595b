use crate::cli::parser::ImportArgs;
use crate::config::Config;
use crate::core::weeks::WeeksLogic;
use crate::errors::AppResult;
use crate::export::notify_written;
use crate::extract::week_extract_file;
use crate::ui::messages::warning;

pub fn handle(args: &ImportArgs, cfg: &Config) -> AppResult<()> {
    let report = WeeksLogic::import(cfg, &args.file, args.season_id, args.year)?;
    notify_written("Weeks", report.rows, &report.path);

    warning(format!(
        "After loading this file into the week table, a date to week id extract ({}) is needed to import matchups",
        week_extract_file(cfg, args.year).display()
    ));
    Ok(())
}
