//! Home page summary.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::case::{Case, CaseStatus};
use crate::inbox::Alert;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: CaseStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub case_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_cases: usize,
    /// One entry per status, including zero counts
    pub by_status: Vec<StatusCount>,
    /// Case types in first-seen order
    pub by_type: Vec<TypeCount>,
    pub unread_alerts: usize,
    /// Newest alerts first
    pub recent_alerts: Vec<Alert>,
}

impl DashboardSummary {
    /// Summarises `cases` and `alerts`. `alerts` must be newest first.
    pub fn build(cases: &[Case], alerts: &[Alert], recent_limit: usize) -> Self {
        let by_status = CaseStatus::iter()
            .map(|status| StatusCount {
                status,
                count: cases.iter().filter(|case| case.status == status).count(),
            })
            .collect();

        let mut by_type: Vec<TypeCount> = Vec::new();
        for case in cases {
            match by_type.iter_mut().find(|t| t.case_type == case.case_type) {
                Some(entry) => entry.count += 1,
                None => by_type.push(TypeCount {
                    case_type: case.case_type.clone(),
                    count: 1,
                }),
            }
        }

        Self {
            total_cases: cases.len(),
            by_status,
            by_type,
            unread_alerts: alerts.iter().filter(|alert| !alert.read).count(),
            recent_alerts: alerts.iter().take(recent_limit).cloned().collect(),
        }
    }

    pub fn count(&self, status: CaseStatus) -> usize {
        self.by_status
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}
