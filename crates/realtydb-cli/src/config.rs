//! realtydb configuration
//!
//! Settings come from `realtydb.toml`, the `REALTYDB_DB` environment variable
//! and command-line flags. Flags win over the environment, the environment
//! over the file, and the file over built-in defaults.

use realtydb_core::errors::{AppError, AppErrorKind};
use realtydb_core::logging_facility::Profile;
use realtydb_core::MatchMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "realtydb.toml";
/// Store file used when nothing else names one
pub const DEFAULT_DATABASE: &str = "mydb.sqlite3";
/// Environment variable naming the store file
pub const DB_ENV_VAR: &str = "REALTYDB_DB";

/// Logging profile as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    #[default]
    Development,
    Production,
    Off,
}

impl LogProfile {
    /// Facility profile to initialize, `None` when logging is off
    pub fn as_profile(self) -> Option<Profile> {
        match self {
            LogProfile::Development => Some(Profile::Development),
            LogProfile::Production => Some(Profile::Production),
            LogProfile::Off => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: LogProfile,
    /// Append log output to this file instead of stderr
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub match_mode: MatchMode,
}

/// Contents of `realtydb.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub editor: EditorConfig,
}

impl FileConfig {
    /// Parse config text
    pub fn parse(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| {
            AppError::new(AppErrorKind::Config)
                .with_op("load_config")
                .with_message(format!("invalid config: {}", e))
        })
    }

    /// Load the config file
    ///
    /// An explicit `path` must exist. Without one, `./realtydb.toml` is read
    /// when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(AppErrorKind::Config)
                .with_op("load_config")
                .with_message(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }
}

/// Effective settings after precedence is applied
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub logging: LoggingConfig,
    pub match_mode: MatchMode,
}

impl Settings {
    /// Combine the layers; an empty environment value counts as unset
    pub fn resolve(file: FileConfig, cli_db: Option<PathBuf>, env_db: Option<String>) -> Self {
        let database = cli_db
            .or_else(|| env_db.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or(file.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        Self {
            database,
            logging: file.logging,
            match_mode: file.editor.match_mode,
        }
    }

    /// Read the config file and environment, then apply `cli_db`
    pub fn load(config_path: Option<&Path>, cli_db: Option<PathBuf>) -> Result<Self, AppError> {
        let file = FileConfig::load(config_path)?;
        Ok(Self::resolve(file, cli_db, std::env::var(DB_ENV_VAR).ok()))
    }
}
