use crate::cli::parser::ImportArgs;
use crate::config::Config;
use crate::core::matchups::MatchupsLogic;
use crate::errors::AppResult;
use crate::export::notify_written;
use crate::extract::match_extract_file;
use crate::ui::messages::warning;

pub fn handle(args: &ImportArgs, cfg: &Config) -> AppResult<()> {
    let report = MatchupsLogic::import(cfg, &args.file, args.year)?;
    notify_written("Matchups", report.rows, &report.path);

    warning(format!(
        "After loading this file into the match table, a match extract ({}) is needed to import rounds",
        match_extract_file(cfg, args.year).display()
    ));
    Ok(())
}
