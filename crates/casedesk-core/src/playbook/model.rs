//! Playbook domain model.
//!
//! A playbook is an AI-suggested (or analyst-authored) response procedure
//! attached to a case.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::lifecycle::{PlaybookAction, Transition};
use crate::error::Result;
use crate::filter::FieldExtractor;

/// Lifecycle status of a playbook. See [`PlaybookStatus::available_actions`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PlaybookStatus {
    #[serde(rename = "Not Used")]
    #[strum(to_string = "Not Used", serialize = "not-used", serialize = "not_used")]
    NotUsed,
    #[serde(rename = "In-progress")]
    #[strum(
        to_string = "In-progress",
        serialize = "in_progress",
        serialize = "in progress"
    )]
    InProgress,
    Applied,
    Rejected,
}

/// A response procedure tied to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    /// Playbook code, e.g. `PB-2024-001`
    pub id: String,
    /// Case this playbook responds to
    pub case_id: String,
    pub title: String,
    pub summary: String,
    pub status: PlaybookStatus,
    /// Date the playbook was generated
    pub date: NaiveDate,
    /// Ordered analyst steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Suggested shell/PowerShell commands
    #[serde(default)]
    pub commands: Vec<String>,
}

fn id_field(playbook: &Playbook) -> &str {
    &playbook.id
}

fn case_id_field(playbook: &Playbook) -> &str {
    &playbook.case_id
}

fn title_field(playbook: &Playbook) -> &str {
    &playbook.title
}

fn summary_field(playbook: &Playbook) -> &str {
    &playbook.summary
}

impl Playbook {
    /// Fields the global search aggregator matches against.
    pub const SEARCH_FIELDS: &'static [FieldExtractor<Playbook>] = &[title_field, summary_field];

    /// Fields the playbook table's search box matches against.
    pub const TABLE_FIELDS: &'static [FieldExtractor<Playbook>] =
        &[id_field, title_field, case_id_field];

    /// Actions offered in the current status.
    pub fn available_actions(&self) -> &'static [PlaybookAction] {
        self.status.available_actions()
    }

    /// Applies `action`, updating the status when the action moves it.
    ///
    /// A `Transition::Delete` result leaves the record untouched; removing
    /// it from the registry is the caller's job.
    pub fn apply(&mut self, action: PlaybookAction) -> Result<Transition> {
        let transition = self.status.transition(action)?;
        if let Transition::To(next) = transition {
            self.status = next;
        }
        Ok(transition)
    }
}
