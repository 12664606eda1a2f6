//! Search over the live registries.

use std::sync::Arc;

use async_trait::async_trait;
use casedesk_core::case::CaseRepository;
use casedesk_core::error::Result;
use casedesk_core::inbox::{AlertRepository, MessageRepository};
use casedesk_core::playbook::PlaybookRepository;
use casedesk_core::report::ReportRepository;
use casedesk_core::search::{SearchCorpus, SearchFilters, SearchResult, SearchService, aggregate};

/// Search service that snapshots every repository and aggregates in memory.
#[derive(Clone)]
pub struct RegistrySearchService {
    cases: Arc<dyn CaseRepository>,
    playbooks: Arc<dyn PlaybookRepository>,
    reports: Arc<dyn ReportRepository>,
    alerts: Arc<dyn AlertRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl RegistrySearchService {
    pub fn new(
        cases: Arc<dyn CaseRepository>,
        playbooks: Arc<dyn PlaybookRepository>,
        reports: Arc<dyn ReportRepository>,
        alerts: Arc<dyn AlertRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            cases,
            playbooks,
            reports,
            alerts,
            messages,
        }
    }
}

#[async_trait]
impl SearchService for RegistrySearchService {
    async fn search(&self, query: &str, filters: Option<SearchFilters>) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Ok(SearchResult::empty(query.to_string()));
        }

        let cases = self.cases.list_all().await?;
        let playbooks = self.playbooks.list_all().await?;
        let reports = self.reports.list_all().await?;
        let alerts = self.alerts.list_all().await?;
        let messages = self.messages.list_all().await?;

        let corpus = SearchCorpus {
            cases: &cases,
            playbooks: &playbooks,
            reports: &reports,
            alerts: &alerts,
            messages: &messages,
        };
        let result = aggregate(query, corpus, &filters.unwrap_or_default());

        tracing::debug!(
            "Search {:?} matched {} records",
            query,
            result.total_matches
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{
        InMemoryAlertRepository, InMemoryCaseRepository, InMemoryMessageRepository,
        InMemoryPlaybookRepository, InMemoryReportRepository,
    };
    use casedesk_core::search::{SearchHit, SearchKind};

    fn service() -> RegistrySearchService {
        RegistrySearchService::new(
            Arc::new(InMemoryCaseRepository::from_fixtures()),
            Arc::new(InMemoryPlaybookRepository::from_fixtures()),
            Arc::new(InMemoryReportRepository::from_fixtures()),
            Arc::new(InMemoryAlertRepository::from_fixtures()),
            Arc::new(InMemoryMessageRepository::from_fixtures()),
        )
    }

    #[tokio::test]
    async fn test_phishing_across_collections() {
        let result = service().search("phishing", None).await.unwrap();

        let has = |kind: SearchKind, title: &str| {
            result
                .items
                .iter()
                .any(|hit| hit.kind() == kind && hit.title() == title)
        };
        assert!(result.items.iter().any(|hit| matches!(
            hit,
            SearchHit::Case(case) if case.case_type == "Phishing"
        )));
        assert!(has(SearchKind::Playbook, "Phishing Response Protocol"));
        assert!(has(SearchKind::Report, "Phishing Analysis Report"));
    }

    #[tokio::test]
    async fn test_blank_query() {
        let result = service().search("   ", None).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_matches, 0);
    }

    #[tokio::test]
    async fn test_filters_pass_through() {
        let filters = SearchFilters {
            kinds: Some(vec![SearchKind::Alert]),
            max_results: None,
        };
        let result = service().search("case #1", Some(filters)).await.unwrap();
        assert!(!result.is_empty());
        assert!(result.items.iter().all(|hit| hit.kind() == SearchKind::Alert));
    }
}
