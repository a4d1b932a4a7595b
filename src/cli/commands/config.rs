use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cfg: &Config, print_config: bool) -> AppResult<()> {
    if print_config {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
    }
    Ok(())
}
