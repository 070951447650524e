//! Configuration loading for session-recall.
//!
//! Layered precedence: built-in defaults, then the default config file
//! (~/.config/session-recall/config.toml), then an optional CLI-given
//! config file, then RECALL_* environment variables. CLI flags are applied
//! by the caller after loading.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::RecallError;

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding one subdirectory per archived session
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Path to the session index database
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_archive_dir() -> String {
    ProjectDirs::from("", "", "session-recall")
        .map(|p| p.data_local_dir().join("session-archives"))
        .unwrap_or_else(|| PathBuf::from("./session-archives"))
        .to_string_lossy()
        .to_string()
}

fn default_db_path() -> String {
    PathBuf::from(default_archive_dir())
        .join("sessions.db")
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            db_path: default_db_path(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/session-recall/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (RECALL_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, RecallError> {
        let config_dir = ProjectDirs::from("", "", "session-recall")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("archive_dir", default_archive_dir())
            .map_err(|e| RecallError::Config(e.to_string()))?
            .set_default("db_path", default_db_path())
            .map_err(|e| RecallError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| RecallError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // RECALL_ARCHIVE_DIR, RECALL_DB_PATH, RECALL_LOG_LEVEL
        builder = builder.add_source(Environment::with_prefix("RECALL").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| RecallError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RecallError::Config(e.to_string()))
    }

    /// Point at a different archive; the index database moves with it.
    pub fn set_archive_dir(&mut self, dir: &str) {
        self.archive_dir = dir.to_string();
        self.db_path = Path::new(dir)
            .join("sessions.db")
            .to_string_lossy()
            .to_string();
    }

    /// Archive directory with `~` expanded.
    pub fn archive_path(&self) -> PathBuf {
        expand_home(&self.archive_dir)
    }

    /// Index database path with `~` expanded.
    pub fn index_path(&self) -> PathBuf {
        expand_home(&self.db_path)
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
