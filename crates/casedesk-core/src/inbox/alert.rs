//! Alerts raised by the monitoring system or the AI analyst.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::filter::{FieldExtractor, Filter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

/// Who raised the alert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AlertKind {
    System,
    #[serde(rename = "AI")]
    #[strum(to_string = "AI")]
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    /// Relative time as displayed, e.g. "10 mins ago"
    pub time: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: AlertKind,
}

fn title_field(alert: &Alert) -> &str {
    &alert.title
}

fn message_field(alert: &Alert) -> &str {
    &alert.message
}

impl Alert {
    /// Fields the global search aggregator matches against.
    pub const SEARCH_FIELDS: &'static [FieldExtractor<Alert>] = &[title_field, message_field];

    /// Marks the alert read. Returns true if it was unread.
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}

/// Constraints for the alert feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertQuery {
    /// `None` shows every severity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlertSeverity>,
    #[serde(default)]
    pub unread_only: bool,
}

impl AlertQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn severity(mut self, severity: Option<AlertSeverity>) -> Self {
        self.severity = severity;
        self
    }

    pub fn unread_only(mut self, unread_only: bool) -> Self {
        self.unread_only = unread_only;
        self
    }

    pub fn filter(&self) -> Filter<'static, Alert> {
        let unread_only = self.unread_only;
        Filter::new()
            .one_of(|alert: &Alert| alert.severity, self.severity.into_iter().collect())
            .matching(move |alert: &Alert| !unread_only || !alert.read)
    }

    pub fn apply(&self, alerts: Vec<Alert>) -> Vec<Alert> {
        self.filter().retain(alerts)
    }
}
