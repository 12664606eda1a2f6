//! Home page summary.

use std::sync::Arc;

use casedesk_core::case::CaseRepository;
use casedesk_core::dashboard::DashboardSummary;
use casedesk_core::error::Result;
use casedesk_core::inbox::AlertRepository;

/// Alerts shown on the home page.
pub const RECENT_ALERT_LIMIT: usize = 3;

pub struct OverviewUseCase {
    cases: Arc<dyn CaseRepository>,
    alerts: Arc<dyn AlertRepository>,
}

impl OverviewUseCase {
    pub fn new(cases: Arc<dyn CaseRepository>, alerts: Arc<dyn AlertRepository>) -> Self {
        Self { cases, alerts }
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        let cases = self.cases.list_all().await?;
        let alerts = self.alerts.list_all().await?;
        Ok(DashboardSummary::build(&cases, &alerts, RECENT_ALERT_LIMIT))
    }
}
