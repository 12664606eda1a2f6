//! Case domain model.
//!
//! A case is a tracked security incident. Its status and assigned analyst
//! are mutated independently by analyst actions; neither guards the other.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{DeskError, Result};
use crate::filter::FieldExtractor;

/// Workflow status of a case.
///
/// Any status may be selected from any other; there is no enforced order.
/// `"Active"` is accepted as an alias of `In Progress` on input but never
/// written back out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CaseStatus {
    Pending,
    #[serde(rename = "In Progress", alias = "Active")]
    #[strum(
        to_string = "In Progress",
        serialize = "in-progress",
        serialize = "in_progress",
        serialize = "inprogress",
        serialize = "active"
    )]
    InProgress,
    Solved,
}

/// Severity of a case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }
}

/// A tracked security incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Case code, e.g. `CASE-101`
    pub id: String,
    /// Server the incident was raised on
    pub server_id: String,
    pub status: CaseStatus,
    pub severity: Severity,
    /// Resolution deadline
    pub deadline: NaiveDate,
    /// Assigned analyst; `None` means unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyst: Option<String>,
    /// Affected user's display name
    pub user_name: String,
    /// Affected user's email
    pub user_email: String,
    /// Incident category, e.g. "Phishing"
    #[serde(rename = "type")]
    pub case_type: String,
    /// Free-form analyst notes, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

fn id_field(case: &Case) -> &str {
    &case.id
}

fn analyst_field(case: &Case) -> &str {
    case.analyst.as_deref().unwrap_or("")
}

fn user_name_field(case: &Case) -> &str {
    &case.user_name
}

fn user_email_field(case: &Case) -> &str {
    &case.user_email
}

fn type_field(case: &Case) -> &str {
    &case.case_type
}

impl Case {
    /// Fields the global search aggregator matches against.
    pub const SEARCH_FIELDS: &'static [FieldExtractor<Case>] =
        &[id_field, user_name_field, user_email_field, type_field];

    /// Fields the case table's search box matches against.
    pub const TABLE_FIELDS: &'static [FieldExtractor<Case>] =
        &[id_field, analyst_field, user_name_field];

    pub fn is_assigned(&self) -> bool {
        self.analyst.is_some()
    }

    /// Sets the status and returns the previous one.
    pub fn set_status(&mut self, status: CaseStatus) -> CaseStatus {
        std::mem::replace(&mut self.status, status)
    }

    /// Assigns an analyst. A blank name unassigns. Status is left untouched.
    pub fn assign(&mut self, analyst: Option<String>) {
        self.analyst = analyst
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
    }

    /// Appends a note. Blank text is rejected.
    pub fn add_note(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DeskError::validation("Note text cannot be empty"));
        }
        self.notes.push(text.to_string());
        Ok(())
    }
}
