use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column positions (0-based) on the "Weekly Matchups" sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleColumns {
    #[serde(default = "default_team_name_col")]
    pub team_name: usize,
    #[serde(default = "default_tee_time_col")]
    pub tee_time: usize,
}

/// Column positions (0-based) on a scorecard sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorecardColumns {
    #[serde(default)]
    pub name: usize,
    #[serde(default = "default_handicap_col")]
    pub handicap: usize,
    #[serde(default = "default_team_override_col")]
    pub team_override: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_files_dir")]
    pub files_dir: String,
    #[serde(default = "default_weekly_matchups_sheet")]
    pub weekly_matchups_sheet: String,
    /// Tee-time groups that make a week bucket complete.
    #[serde(default = "default_expected_tee_times")]
    pub expected_tee_times: usize,
    /// Date markers must fall in a year strictly greater than this.
    #[serde(default = "default_min_season_year")]
    pub min_season_year: i32,
    /// Informal names on scorecards, keyed lowercase.
    #[serde(default = "default_name_aliases")]
    pub name_aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub schedule_columns: ScheduleColumns,
    #[serde(default)]
    pub scorecard_columns: ScorecardColumns,
}

fn default_files_dir() -> String {
    "files".to_string()
}
fn default_weekly_matchups_sheet() -> String {
    "Weekly Matchups".to_string()
}
fn default_expected_tee_times() -> usize {
    6
}
fn default_min_season_year() -> i32 {
    2000
}
fn default_name_aliases() -> BTreeMap<String, String> {
    BTreeMap::from([("baby".to_string(), "Brien".to_string())])
}
fn default_team_name_col() -> usize {
    5
}
fn default_tee_time_col() -> usize {
    6
}
fn default_handicap_col() -> usize {
    1
}
fn default_team_override_col() -> usize {
    5
}

impl Default for ScheduleColumns {
    fn default() -> Self {
        Self {
            team_name: default_team_name_col(),
            tee_time: default_tee_time_col(),
        }
    }
}

impl Default for ScorecardColumns {
    fn default() -> Self {
        Self {
            name: 0,
            handicap: default_handicap_col(),
            team_override: default_team_override_col(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_dir: default_files_dir(),
            weekly_matchups_sheet: default_weekly_matchups_sheet(),
            expected_tee_times: default_expected_tee_times(),
            min_season_year: default_min_season_year(),
            name_aliases: default_name_aliases(),
            schedule_columns: ScheduleColumns::default(),
            scorecard_columns: ScorecardColumns::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("golfimport")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".golfimport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("golfimport.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve a file name inside the configured files directory.
    pub fn file_path(&self, name: &str) -> PathBuf {
        Path::new(&self.files_dir).join(name)
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn write_default(path: &Path) -> AppResult<Config> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
