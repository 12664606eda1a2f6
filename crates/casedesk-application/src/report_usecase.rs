//! Report use cases.

use std::sync::Arc;

use casedesk_core::error::{DeskError, Result};
use casedesk_core::report::{Report, ReportQuery, ReportRepository};

pub struct ReportUseCase {
    reports: Arc<dyn ReportRepository>,
}

impl ReportUseCase {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    pub async fn list(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        Ok(query.apply(self.reports.list_all().await?))
    }

    pub async fn show(&self, report_id: &str) -> Result<Report> {
        self.reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| DeskError::not_found("report", report_id))
    }

    /// Sends the report to the affected user.
    pub async fn send(&self, report_id: &str) -> Result<Report> {
        let mut report = self.show(report_id).await?;
        let previous = report.send();
        self.reports.save(&report).await?;
        tracing::info!("Report {} sent (was {})", report_id, previous);
        Ok(report)
    }

    pub async fn save_draft(&self, report_id: &str, body: &str) -> Result<Report> {
        let mut report = self.show(report_id).await?;
        report.save_draft(body)?;
        self.reports.save(&report).await?;
        tracing::info!("Report {} draft saved ({} chars)", report_id, body.len());
        Ok(report)
    }

    /// Plain-text rendering for download.
    pub async fn export(&self, report_id: &str) -> Result<String> {
        let report = self.show(report_id).await?;
        tracing::debug!("Exporting report {}", report_id);
        Ok(report.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_core::report::ReportStatus;
    use casedesk_infrastructure::memory::InMemoryReportRepository;

    fn usecase() -> ReportUseCase {
        ReportUseCase::new(Arc::new(InMemoryReportRepository::from_fixtures()))
    }

    #[tokio::test]
    async fn test_send_persists() {
        let usecase = usecase();
        let sent = usecase.send("REP-2024-003").await.unwrap();
        assert!(sent.sent_to_user());

        let stored = usecase.show("REP-2024-003").await.unwrap();
        assert_eq!(stored.status, ReportStatus::Sent);
        assert!(stored.sent_to_user());
    }

    #[tokio::test]
    async fn test_save_draft_and_export() {
        let usecase = usecase();
        usecase
            .save_draft("REP-2024-002", "Malware removed from host.")
            .await
            .unwrap();
        let text = usecase.export("REP-2024-002").await.unwrap();
        assert!(text.contains("Malware Containment Report"));
        assert!(text.contains("Malware removed from host."));
    }

    #[tokio::test]
    async fn test_sent_report_rejects_draft() {
        let usecase = usecase();
        let err = usecase.save_draft("REP-2024-001", "x").await.unwrap_err();
        assert!(err.is_invalid_transition());
        let report = usecase.show("REP-2024-001").await.unwrap();
        assert!(report.body.as_deref().unwrap().starts_with("REPORT SUMMARY"));
    }

    #[tokio::test]
    async fn test_unknown_report() {
        assert!(usecase().send("REP-404").await.unwrap_err().is_not_found());
    }
}
