//! Case use cases: the case table, case detail and analyst actions.

use std::sync::Arc;

use casedesk_core::case::{Case, CaseQuery, CaseRepository, CaseStatus};
use casedesk_core::error::{DeskError, Result};
use casedesk_core::filter::Page;
use casedesk_core::playbook::{Playbook, PlaybookQuery, PlaybookRepository};
use casedesk_core::preference::{PinToggle, Preferences};
use casedesk_core::report::{Report, ReportRepository};
use serde::Serialize;

/// Everything the case detail page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetail {
    pub case: Case,
    pub pinned: bool,
    pub playbooks: Vec<Playbook>,
    pub reports: Vec<Report>,
}

pub struct CaseUseCase {
    cases: Arc<dyn CaseRepository>,
    playbooks: Arc<dyn PlaybookRepository>,
    reports: Arc<dyn ReportRepository>,
    preferences: Preferences,
}

impl CaseUseCase {
    pub fn new(
        cases: Arc<dyn CaseRepository>,
        playbooks: Arc<dyn PlaybookRepository>,
        reports: Arc<dyn ReportRepository>,
        preferences: Preferences,
    ) -> Self {
        Self {
            cases,
            playbooks,
            reports,
            preferences,
        }
    }

    pub async fn list(&self, query: &CaseQuery) -> Result<Page<Case>> {
        let cases = self.cases.list_all().await?;
        let page = query.apply(cases);
        tracing::debug!("Case query matched {} of registry", page.total);
        Ok(page)
    }

    async fn require(&self, case_id: &str) -> Result<Case> {
        self.cases
            .find_by_id(case_id)
            .await?
            .ok_or_else(|| DeskError::not_found("case", case_id))
    }

    pub async fn show(&self, case_id: &str) -> Result<CaseDetail> {
        let case = self.require(case_id).await?;
        let pinned = self.preferences.pinned_cases().await?.contains(case_id);
        let playbooks = PlaybookQuery::new()
            .case_id(case_id)
            .apply(self.playbooks.list_all().await?);
        let reports = self
            .reports
            .list_all()
            .await?
            .into_iter()
            .filter(|report| report.case_id == case_id)
            .collect();

        Ok(CaseDetail {
            case,
            pinned,
            playbooks,
            reports,
        })
    }

    pub async fn set_status(&self, case_id: &str, status: CaseStatus) -> Result<Case> {
        let mut case = self.require(case_id).await?;
        let previous = case.set_status(status);
        self.cases.save(&case).await?;
        tracing::info!("Case {} status {} -> {}", case_id, previous, status);
        Ok(case)
    }

    /// Assigns (or with `None`/blank, unassigns) an analyst.
    pub async fn assign(&self, case_id: &str, analyst: Option<String>) -> Result<Case> {
        let mut case = self.require(case_id).await?;
        case.assign(analyst);
        self.cases.save(&case).await?;
        tracing::info!(
            "Case {} assigned to {}",
            case_id,
            case.analyst.as_deref().unwrap_or("nobody")
        );
        Ok(case)
    }

    /// Distinct analyst names across the registry, sorted.
    pub async fn analysts(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .cases
            .list_all()
            .await?
            .into_iter()
            .filter_map(|case| case.analyst)
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    pub async fn add_note(&self, case_id: &str, text: &str) -> Result<Case> {
        let mut case = self.require(case_id).await?;
        case.add_note(text)?;
        self.cases.save(&case).await?;
        tracing::info!("Case {} note added ({} total)", case_id, case.notes.len());
        Ok(case)
    }

    /// Pins or unpins a known case.
    pub async fn toggle_pin(&self, case_id: &str) -> Result<PinToggle> {
        self.require(case_id).await?;
        let outcome = self.preferences.toggle_pin(case_id).await?;
        tracing::info!("Case {} {:?}", case_id, outcome);
        Ok(outcome)
    }

    /// Pinned cases in pin order. Ids no longer in the registry are skipped.
    pub async fn pinned(&self) -> Result<Vec<Case>> {
        let pinned = self.preferences.pinned_cases().await?;
        let cases = self.cases.list_all().await?;
        Ok(pinned
            .ids()
            .iter()
            .filter_map(|id| cases.iter().find(|case| &case.id == id).cloned())
            .collect())
    }
}
