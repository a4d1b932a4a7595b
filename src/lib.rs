//! golfimport library root.
//! Exposes the CLI parser, the high-level run() function and the import
//! pipeline (extract store, workbook extractors, resolvers, writers).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod extract;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;
pub mod workbook;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cli, *force),
        Commands::Config { print_config } => cli::commands::config::handle(cfg, *print_config),
        Commands::Weeks(args) => cli::commands::weeks::handle(args, cfg),
        Commands::Matchups(args) => cli::commands::matchups::handle(args, cfg),
        Commands::Rounds(args) => cli::commands::rounds::handle(args, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once per run
    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    if let Some(dir) = &cli.files_dir {
        cfg.files_dir = utils::path::expand_tilde(dir).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
