//! Report table query.

use serde::{Deserialize, Serialize};

use super::model::{Report, ReportStatus};
use crate::filter::Filter;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub statuses: Vec<ReportStatus>,
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn statuses(mut self, statuses: Vec<ReportStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn filter(&self) -> Filter<'static, Report> {
        Filter::new()
            .text(&self.text, Report::TABLE_FIELDS)
            .one_of(|report: &Report| report.status, self.statuses.clone())
    }

    pub fn apply(&self, reports: Vec<Report>) -> Vec<Report> {
        self.filter().retain(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(id: &str, case_id: &str, title: &str, status: ReportStatus) -> Report {
        Report {
            id: id.to_string(),
            case_id: case_id.to_string(),
            analyst: "John Doe".to_string(),
            status,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            title: title.to_string(),
            body: None,
        }
    }

    #[test]
    fn test_text_and_status() {
        let reports = vec![
            report("REP-1", "CASE-101", "Phishing Analysis", ReportStatus::Sent),
            report("REP-2", "CASE-105", "Malware Containment", ReportStatus::Pending),
            report("REP-3", "CASE-112", "Phishing Follow-up", ReportStatus::Draft),
        ];
        let hits = ReportQuery::new()
            .text("PHISH")
            .statuses(vec![ReportStatus::Draft, ReportStatus::Pending])
            .apply(reports.clone());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "REP-3");

        // analyst is searched globally, not in the table
        assert!(ReportQuery::new().text("john").apply(reports).is_empty());
    }
}
