//! Playbook table query.

use serde::{Deserialize, Serialize};

use super::model::{Playbook, PlaybookStatus};
use crate::filter::Filter;

/// Text and status constraints for the playbook table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub statuses: Vec<PlaybookStatus>,
    /// Restrict to playbooks attached to this case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

impl PlaybookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn statuses(mut self, statuses: Vec<PlaybookStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn case_id(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }

    pub fn filter(&self) -> Filter<'static, Playbook> {
        let filter = Filter::new()
            .text(&self.text, Playbook::TABLE_FIELDS)
            .one_of(|playbook: &Playbook| playbook.status, self.statuses.clone());
        match self.case_id.clone() {
            Some(case_id) => {
                filter.matching(move |playbook: &Playbook| playbook.case_id == case_id)
            }
            None => filter,
        }
    }

    /// Keeps matching playbooks in registry order.
    pub fn apply(&self, playbooks: Vec<Playbook>) -> Vec<Playbook> {
        self.filter().retain(playbooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn playbook(id: &str, case_id: &str, title: &str, status: PlaybookStatus) -> Playbook {
        Playbook {
            id: id.to_string(),
            case_id: case_id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            status,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            steps: Vec::new(),
            commands: Vec::new(),
        }
    }

    fn playbooks() -> Vec<Playbook> {
        vec![
            playbook("PB-1", "CASE-101", "Phishing Response", PlaybookStatus::Applied),
            playbook("PB-2", "CASE-105", "Malware Containment", PlaybookStatus::InProgress),
            playbook("PB-3", "CASE-112", "Login Review", PlaybookStatus::NotUsed),
        ]
    }

    #[test]
    fn test_text_matches_case_id() {
        let hits = PlaybookQuery::new().text("case-105").apply(playbooks());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PB-2");
    }

    #[test]
    fn test_status_set() {
        let hits = PlaybookQuery::new()
            .statuses(vec![PlaybookStatus::NotUsed, PlaybookStatus::Applied])
            .apply(playbooks());
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PB-1", "PB-3"]);
    }

    #[test]
    fn test_case_restriction() {
        let hits = PlaybookQuery::new().case_id("CASE-112").apply(playbooks());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Login Review");
    }
}
