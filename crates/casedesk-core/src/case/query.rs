//! Case table query: filter, sort and paginate.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::{Case, CaseStatus, Severity};
use crate::filter::{Filter, Page, PageRequest};

/// Assignment constraint for the case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Assignment {
    /// No constraint
    #[default]
    Any,
    /// Only cases with an analyst
    Assigned,
    /// Only cases without an analyst
    Unassigned,
}

impl Assignment {
    pub fn matches(&self, case: &Case) -> bool {
        match self {
            Assignment::Any => true,
            Assignment::Assigned => case.is_assigned(),
            Assignment::Unassigned => !case.is_assigned(),
        }
    }
}

/// Sort order for the case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CaseSort {
    /// Registry order
    #[default]
    Registry,
    /// Earliest deadline first
    Deadline,
    /// Most severe first, then earliest deadline
    Severity,
}

/// Everything the case table applies to the full collection on each change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub statuses: Vec<CaseStatus>,
    #[serde(default)]
    pub severities: Vec<Severity>,
    #[serde(default)]
    pub assignment: Assignment,
    #[serde(default)]
    pub sort: CaseSort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageRequest>,
}

impl CaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn statuses(mut self, statuses: Vec<CaseStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn severities(mut self, severities: Vec<Severity>) -> Self {
        self.severities = severities;
        self
    }

    pub fn assignment(mut self, assignment: Assignment) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn sort(mut self, sort: CaseSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Builds the conjunction of this query's predicates.
    pub fn filter(&self) -> Filter<'static, Case> {
        let assignment = self.assignment;
        Filter::new()
            .text(&self.text, Case::TABLE_FIELDS)
            .one_of(|case: &Case| case.status, self.statuses.clone())
            .one_of(|case: &Case| case.severity, self.severities.clone())
            .matching(move |case: &Case| assignment.matches(case))
    }

    /// Filters, sorts and paginates `cases`.
    pub fn apply(&self, cases: Vec<Case>) -> Page<Case> {
        let mut matched = self.filter().retain(cases);
        match self.sort {
            CaseSort::Registry => {}
            CaseSort::Deadline => matched.sort_by_key(|case| case.deadline),
            CaseSort::Severity => matched.sort_by(|a, b| {
                b.severity
                    .rank()
                    .cmp(&a.severity.rank())
                    .then(a.deadline.cmp(&b.deadline))
            }),
        }
        match self.page {
            Some(request) => Page::paginate(matched, request),
            None => Page::single(matched),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn case(id: &str, status: CaseStatus, severity: Severity, day: u32, analyst: Option<&str>) -> Case {
        Case {
            id: id.to_string(),
            server_id: "SRV".to_string(),
            status,
            severity,
            deadline: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            analyst: analyst.map(str::to_string),
            user_name: format!("User {}", id),
            user_email: format!("{}@company.com", id.to_lowercase()),
            case_type: "Malware".to_string(),
            notes: Vec::new(),
        }
    }

    fn cases() -> Vec<Case> {
        vec![
            case("CASE-1", CaseStatus::Pending, Severity::Low, 20, Some("John Doe")),
            case("CASE-2", CaseStatus::InProgress, Severity::Critical, 12, None),
            case("CASE-3", CaseStatus::Solved, Severity::High, 10, Some("Jane Smith")),
            case("CASE-4", CaseStatus::Pending, Severity::Critical, 16, Some("Mike Ross")),
        ]
    }

    fn ids(page: &Page<Case>) -> Vec<&str> {
        page.items.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_default_query_returns_registry_order() {
        let page = CaseQuery::new().apply(cases());
        assert_eq!(ids(&page), vec!["CASE-1", "CASE-2", "CASE-3", "CASE-4"]);
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_text_matches_analyst() {
        let page = CaseQuery::new().text("jane").apply(cases());
        assert_eq!(ids(&page), vec!["CASE-3"]);
    }

    #[test]
    fn test_status_and_severity_sets_conjoin() {
        let page = CaseQuery::new()
            .statuses(vec![CaseStatus::Pending, CaseStatus::InProgress])
            .severities(vec![Severity::Critical])
            .apply(cases());
        assert_eq!(ids(&page), vec!["CASE-2", "CASE-4"]);
    }

    #[test]
    fn test_assignment_filter() {
        let unassigned = CaseQuery::new()
            .assignment(Assignment::Unassigned)
            .apply(cases());
        assert_eq!(ids(&unassigned), vec!["CASE-2"]);

        let assigned = CaseQuery::new().assignment(Assignment::Assigned).apply(cases());
        assert_eq!(assigned.total, 3);
    }

    #[test]
    fn test_sort_by_severity_then_deadline() {
        let page = CaseQuery::new().sort(CaseSort::Severity).apply(cases());
        assert_eq!(ids(&page), vec!["CASE-2", "CASE-4", "CASE-3", "CASE-1"]);
    }

    #[test]
    fn test_sort_by_deadline_and_paginate() {
        let page = CaseQuery::new()
            .sort(CaseSort::Deadline)
            .page(PageRequest::new(2, 3))
            .apply(cases());
        assert_eq!(ids(&page), vec!["CASE-1"]);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_deserialized_zero_page_is_clamped() {
        let query: CaseQuery =
            serde_json::from_str(r#"{"page":{"number":1,"size":0}}"#).unwrap();
        let page = query.apply(cases());
        assert_eq!(ids(&page), vec!["CASE-1"]);
        assert_eq!(page.page_count, 4);
        assert!(query.apply(Vec::new()).items.is_empty());

        let query: CaseQuery =
            serde_json::from_str(r#"{"page":{"number":0,"size":5}}"#).unwrap();
        let page = query.apply(cases());
        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.page_count, 1);
    }
}
