use std::sync::Arc;

use anyhow::{Context, Result};
use casedesk_application::Desk;
use casedesk_core::config::DeskConfig;
use casedesk_core::preference::PreferenceStore;
use casedesk_infrastructure::{
    ConfigService, DeskPaths, FilePreferenceStore, MemoryPreferenceStore,
};
use tracing_appender::non_blocking::WorkerGuard;

use super::logging;

/// Everything a command needs, built once per process.
pub struct AppContext {
    pub desk: Desk,
    pub config: DeskConfig,
    pub paths: DeskPaths,
    pub ephemeral: bool,
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    /// Loads config, installs logging and opens the preference store.
    ///
    /// `ephemeral` swaps the preference file for an in-memory store and
    /// keeps logs on stderr.
    pub async fn bootstrap(ephemeral: bool) -> Result<Self> {
        let config_file =
            DeskPaths::config_file_from_env().context("Failed to locate config file")?;
        let config = ConfigService::new(config_file.clone())
            .get_config()
            .with_context(|| format!("Failed to load config from {}", config_file.display()))?;
        let paths =
            DeskPaths::resolve(config_file, &config).context("Failed to resolve data directory")?;

        let log_dir = (!ephemeral).then(|| paths.log_dir());
        let log_guard = logging::init(log_dir.as_deref(), &config.log_level)?;

        let store: Arc<dyn PreferenceStore> = if ephemeral {
            Arc::new(MemoryPreferenceStore::new())
        } else {
            let path = paths.preference_file();
            let store = FilePreferenceStore::open(path.clone())
                .await
                .with_context(|| format!("Failed to open preferences at {}", path.display()))?;
            Arc::new(store)
        };

        tracing::info!(
            data_dir = %paths.data_dir().display(),
            ephemeral,
            "CaseDesk started"
        );

        Ok(Self {
            desk: Desk::with_fixtures(store, config.default_theme),
            config,
            paths,
            ephemeral,
            _log_guard: log_guard,
        })
    }

    /// Case table rows per page.
    pub fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }
}
