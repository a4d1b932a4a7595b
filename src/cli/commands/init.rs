use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, force: bool) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::write_default(&path)?;

    success(format!("Config file : {}", path.display()));
    info(format!("Files dir   : {}", cfg.files_dir));
    Ok(())
}
