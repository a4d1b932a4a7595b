use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for golfimport
/// Converts league schedule and scorecard workbooks into import files
#[derive(Parser)]
#[command(
    name = "golfimport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert golf league schedule and scorecard workbooks into flat import files",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding reference extracts and output files
    #[arg(global = true, long = "files-dir")]
    pub files_dir: Option<String>,

    /// Load configuration from this file instead of the default location
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The (file name, season id, year) triple shared by every import.
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Source workbook (.xlsx)
    #[arg(long, value_name = "FILE")]
    pub file: String,

    /// Season id written into the weeks file
    #[arg(long = "season", value_name = "ID")]
    pub season_id: i32,

    /// Season year used to name reference and output files
    #[arg(long, value_name = "YYYY")]
    pub year: i32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the active configuration as YAML")]
        print_config: bool,
    },

    /// Build the weeks import file from the "Weekly Matchups" sheet
    Weeks(ImportArgs),

    /// Build the matchups import file from the "Weekly Matchups" sheet
    Matchups(ImportArgs),

    /// Build the rounds import file from a scorecard workbook
    Rounds(ImportArgs),
}
