//! Path resolution for CaseDesk files.
//!
//! ```text
//! ~/.config/casedesk/          # Config directory
//! └── config.toml              # DeskConfig
//!
//! ~/.local/share/casedesk/     # Data directory
//! ├── local_storage.json       # Preference store
//! └── logs/                    # Daily rolling logs
//!     └── casedesk.log.YYYY-MM-DD
//! ```
//!
//! `CASEDESK_CONFIG` overrides the config file, `CASEDESK_DATA_DIR` the data
//! directory. Without the env override, `data_dir` from the config file
//! wins over the platform default.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use casedesk_core::config::DeskConfig;
use casedesk_core::error::{DeskError, Result};

pub const APP_DIR_NAME: &str = "casedesk";
pub const CONFIG_ENV: &str = "CASEDESK_CONFIG";
pub const DATA_DIR_ENV: &str = "CASEDESK_DATA_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";
const PREFERENCE_FILE_NAME: &str = "local_storage.json";
const LOG_DIR_NAME: &str = "logs";

/// Resolved locations of every file CaseDesk touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskPaths {
    config_file: PathBuf,
    data_dir: PathBuf,
}

impl DeskPaths {
    pub fn new(config_file: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            config_file,
            data_dir,
        }
    }

    /// Config file location from the process environment.
    pub fn config_file_from_env() -> Result<PathBuf> {
        config_file_with(|key| std::env::var_os(key))
    }

    /// Resolves all paths from the process environment and `config`.
    pub fn resolve(config_file: PathBuf, config: &DeskConfig) -> Result<Self> {
        Self::resolve_with(config_file, config, |key| std::env::var_os(key))
    }

    /// Like [`DeskPaths::resolve`] with an explicit environment lookup.
    pub fn resolve_with<F>(config_file: PathBuf, config: &DeskConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let data_dir = match env(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => match &config.data_dir {
                Some(dir) => dir.clone(),
                None => dirs::data_dir()
                    .map(|dir| dir.join(APP_DIR_NAME))
                    .ok_or_else(|| DeskError::config("Cannot determine data directory"))?,
            },
        };
        Ok(Self::new(config_file, data_dir))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn preference_file(&self) -> PathBuf {
        self.data_dir.join(PREFERENCE_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

/// Config file location with an explicit environment lookup.
pub fn config_file_with<F>(env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(path) = env(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| DeskError::config("Cannot determine config directory"))
}
