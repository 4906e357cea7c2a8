use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a period is fetched: one weekly page or seven daily pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    Week,
    Day,
}

/// Where calendar pages come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Live pages over HTTP.
    Http,
    /// Saved pages in `snapshot_dir`.
    Snapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database holding completed periods and the internal log.
    pub database: String,
    /// JSON file holding the deduplicated events.
    pub store: String,
    /// First day to scrape (YYYY-MM-DD); the week containing it is the first period.
    #[serde(default = "default_start")]
    pub start: String,
    /// Number of weekly periods to cover from `start`.
    #[serde(default = "default_cycles")]
    pub cycles: usize,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_period_mode")]
    pub period_mode: PeriodMode,
    #[serde(default = "default_source")]
    pub source: SourceKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub snapshot_dir: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_start() -> String {
    "2023-01-01".to_string()
}
fn default_cycles() -> usize {
    6
}
fn default_timezone() -> String {
    "Asia/Tehran".to_string()
}
fn default_period_mode() -> PeriodMode {
    PeriodMode::Week
}
fn default_source() -> SourceKind {
    SourceKind::Http
}
fn default_base_url() -> String {
    "https://www.forexfactory.com/calendar".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            store: Self::store_file().to_string_lossy().to_string(),
            start: default_start(),
            cycles: default_cycles(),
            timezone: default_timezone(),
            period_mode: default_period_mode(),
            source: default_source(),
            base_url: default_base_url(),
            snapshot_dir: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ffcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ffcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ffcal.conf")
    }

    /// Return the full path of the SQLite state database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ffcal.sqlite")
    }

    /// Return the full path of the event store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("events.json")
    }

    /// Load configuration from the standard location, or defaults if absent.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// First day of the configured range.
    pub fn start_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(self.start.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.start.clone()))
    }

    /// Initialize configuration, returning the database path that was written.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            let p = Path::new(&name);
            let db_path = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            config.database = db_path.to_string_lossy().to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
