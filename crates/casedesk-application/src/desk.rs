//! Wiring of every use case over one set of registries and one
//! preference store.

use std::sync::Arc;

use casedesk_core::case::CaseRepository;
use casedesk_core::inbox::{AlertRepository, MessageRepository};
use casedesk_core::playbook::PlaybookRepository;
use casedesk_core::preference::{PreferenceStore, Preferences, Theme};
use casedesk_core::report::ReportRepository;
use casedesk_infrastructure::RegistrySearchService;
use casedesk_infrastructure::memory::{
    InMemoryAlertRepository, InMemoryCaseRepository, InMemoryMessageRepository,
    InMemoryPlaybookRepository, InMemoryReportRepository,
};

use crate::case_usecase::CaseUseCase;
use crate::inbox_usecase::InboxUseCase;
use crate::overview_usecase::OverviewUseCase;
use crate::playbook_usecase::PlaybookUseCase;
use crate::report_usecase::ReportUseCase;
use crate::search_usecase::SearchUseCase;
use crate::settings_usecase::SettingsUseCase;

/// The five record registries.
#[derive(Clone)]
pub struct Registries {
    pub cases: Arc<dyn CaseRepository>,
    pub playbooks: Arc<dyn PlaybookRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub alerts: Arc<dyn AlertRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl Registries {
    /// Fresh in-memory registries seeded from the built-in fixtures.
    pub fn from_fixtures() -> Self {
        Self {
            cases: Arc::new(InMemoryCaseRepository::from_fixtures()),
            playbooks: Arc::new(InMemoryPlaybookRepository::from_fixtures()),
            reports: Arc::new(InMemoryReportRepository::from_fixtures()),
            alerts: Arc::new(InMemoryAlertRepository::from_fixtures()),
            messages: Arc::new(InMemoryMessageRepository::from_fixtures()),
        }
    }
}

/// Every use case, sharing registries and preferences.
pub struct Desk {
    pub cases: CaseUseCase,
    pub playbooks: PlaybookUseCase,
    pub reports: ReportUseCase,
    pub inbox: InboxUseCase,
    pub search: SearchUseCase,
    pub settings: SettingsUseCase,
    pub overview: OverviewUseCase,
    preferences: Preferences,
}

impl Desk {
    pub fn new(registries: Registries, store: Arc<dyn PreferenceStore>, default_theme: Theme) -> Self {
        let preferences = Preferences::new(store).with_default_theme(default_theme);
        let search_service = Arc::new(RegistrySearchService::new(
            registries.cases.clone(),
            registries.playbooks.clone(),
            registries.reports.clone(),
            registries.alerts.clone(),
            registries.messages.clone(),
        ));

        Self {
            cases: CaseUseCase::new(
                registries.cases.clone(),
                registries.playbooks.clone(),
                registries.reports.clone(),
                preferences.clone(),
            ),
            playbooks: PlaybookUseCase::new(registries.playbooks.clone()),
            reports: ReportUseCase::new(registries.reports.clone()),
            inbox: InboxUseCase::new(
                registries.alerts.clone(),
                registries.messages.clone(),
                registries.cases.clone(),
            ),
            search: SearchUseCase::new(search_service, preferences.clone()),
            settings: SettingsUseCase::new(preferences.clone()),
            overview: OverviewUseCase::new(registries.cases, registries.alerts),
            preferences,
        }
    }

    /// Fixture registries over `store`.
    pub fn with_fixtures(store: Arc<dyn PreferenceStore>, default_theme: Theme) -> Self {
        Self::new(Registries::from_fixtures(), store, default_theme)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}
