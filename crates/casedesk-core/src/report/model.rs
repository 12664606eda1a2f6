//! Report domain model.
//!
//! A report is the written resolution of a case. Whether it reached the
//! affected user is not stored separately: it is derived from the status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{DeskError, Result};
use crate::filter::FieldExtractor;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ReportStatus {
    Draft,
    Pending,
    Sent,
}

/// Analyst report for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report code, e.g. `REP-2024-001`
    pub id: String,
    pub case_id: String,
    /// Author
    pub analyst: String,
    pub status: ReportStatus,
    pub date: NaiveDate,
    pub title: String,
    /// Final resolution text, if one has been written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

fn id_field(report: &Report) -> &str {
    &report.id
}

fn case_id_field(report: &Report) -> &str {
    &report.case_id
}

fn title_field(report: &Report) -> &str {
    &report.title
}

fn analyst_field(report: &Report) -> &str {
    &report.analyst
}

impl Report {
    /// Fields the global search aggregator matches against.
    pub const SEARCH_FIELDS: &'static [FieldExtractor<Report>] = &[title_field, analyst_field];

    /// Fields the report table's search box matches against.
    pub const TABLE_FIELDS: &'static [FieldExtractor<Report>] =
        &[id_field, title_field, case_id_field];

    /// True iff the report has been sent to the affected user.
    pub fn sent_to_user(&self) -> bool {
        self.status == ReportStatus::Sent
    }

    /// Sends the report. Sending twice is a no-op.
    ///
    /// Returns the previous status.
    pub fn send(&mut self) -> ReportStatus {
        std::mem::replace(&mut self.status, ReportStatus::Sent)
    }

    /// Stores `body` as the working text without changing the status.
    pub fn save_draft(&mut self, body: impl Into<String>) -> Result<()> {
        if self.sent_to_user() {
            return Err(DeskError::invalid_transition(
                "report",
                self.status,
                "save draft of",
            ));
        }
        self.body = Some(body.into());
        Ok(())
    }

    /// Renders the report as a plain-text document.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push('\n');
        out.push_str(&format!("Report:  {}\n", self.id));
        out.push_str(&format!("Case:    {}\n", self.case_id));
        out.push_str(&format!("Analyst: {}\n", self.analyst));
        out.push_str(&format!("Date:    {}\n", self.date.format("%Y-%m-%d")));
        out.push_str(&format!("Status:  {}\n", self.status));
        out.push('\n');
        match &self.body {
            Some(body) => out.push_str(body.trim_end()),
            None => out.push_str("(no resolution text yet)"),
        }
        out.push('\n');
        out
    }
}
