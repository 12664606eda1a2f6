//! Configuration service implementation.
//!
//! Loads [`DeskConfig`] from `config.toml`, writing a default file on first
//! run, and caches it for the life of the process.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use casedesk_core::config::DeskConfig;
use casedesk_core::error::Result;

/// Loads and caches the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<DeskConfig>>>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<DeskConfig> {
        if let Ok(read_lock) = self.config.read() {
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_or_create()?;
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_or_create(&self) -> Result<DeskConfig> {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            let config = DeskConfig::from_toml(&content)?;
            tracing::debug!("Loaded config from {}", self.path.display());
            return Ok(config);
        }

        let config = DeskConfig::default();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, config.to_toml()?)?;
        tracing::info!("Created default config at {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_core::preference::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("casedesk").join("config.toml");
        let service = ConfigService::new(path.clone());

        let config = service.get_config().unwrap();
        assert_eq!(config, DeskConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_reads_existing_file_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_theme = \"dark\"\n").unwrap();
        let service = ConfigService::new(path.clone());

        assert_eq!(service.get_config().unwrap().default_theme, Theme::Dark);

        fs::write(&path, "default_theme = \"light\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().default_theme, Theme::Dark);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().default_theme, Theme::Light);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = \"many\"").unwrap();
        let service = ConfigService::new(path);
        assert!(service.get_config().unwrap_err().is_serialization());
    }
}
