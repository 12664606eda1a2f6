//! Cross-collection search aggregation.
//!
//! Pure over borrowed collections so it can run against any snapshot of the
//! registries. No ranking: hits come out grouped by [`SearchKind`] order,
//! each group in record order.

use crate::case::Case;
use crate::filter::matches_text;
use crate::inbox::{Alert, Message};
use crate::playbook::Playbook;
use crate::report::Report;

use super::model::{SearchFilters, SearchHit, SearchKind, SearchResult};

/// Borrowed snapshot of every searchable collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCorpus<'a> {
    pub cases: &'a [Case],
    pub playbooks: &'a [Playbook],
    pub reports: &'a [Report],
    pub alerts: &'a [Alert],
    pub messages: &'a [Message],
}

fn collect<T: Clone>(
    items: &[T],
    query: &str,
    fields: &[crate::filter::FieldExtractor<T>],
    wrap: fn(T) -> SearchHit,
    out: &mut Vec<SearchHit>,
) {
    out.extend(
        items
            .iter()
            .filter(|item| matches_text(*item, query, fields))
            .cloned()
            .map(wrap),
    );
}

/// Matches `query` against the designated fields of every collection.
///
/// A blank query yields an empty result rather than everything.
pub fn aggregate(query: &str, corpus: SearchCorpus<'_>, filters: &SearchFilters) -> SearchResult {
    if query.trim().is_empty() {
        return SearchResult::empty(query.to_string());
    }

    let mut items = Vec::new();
    if filters.includes(SearchKind::Case) {
        collect(corpus.cases, query, Case::SEARCH_FIELDS, SearchHit::Case, &mut items);
    }
    if filters.includes(SearchKind::Playbook) {
        collect(
            corpus.playbooks,
            query,
            Playbook::SEARCH_FIELDS,
            SearchHit::Playbook,
            &mut items,
        );
    }
    if filters.includes(SearchKind::Report) {
        collect(corpus.reports, query, Report::SEARCH_FIELDS, SearchHit::Report, &mut items);
    }
    if filters.includes(SearchKind::Alert) {
        collect(corpus.alerts, query, Alert::SEARCH_FIELDS, SearchHit::Alert, &mut items);
    }
    if filters.includes(SearchKind::Message) {
        collect(
            corpus.messages,
            query,
            Message::SEARCH_FIELDS,
            SearchHit::Message,
            &mut items,
        );
    }

    let mut result = SearchResult::new(query.to_string(), items);
    if let Some(max) = filters.max_results {
        result.items.truncate(max);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{CaseStatus, Severity};
    use crate::inbox::{AlertKind, AlertSeverity, MessageRole};
    use crate::playbook::PlaybookStatus;
    use crate::report::ReportStatus;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    struct Fixture {
        cases: Vec<Case>,
        playbooks: Vec<Playbook>,
        reports: Vec<Report>,
        alerts: Vec<Alert>,
        messages: Vec<Message>,
    }

    impl Fixture {
        fn corpus(&self) -> SearchCorpus<'_> {
            SearchCorpus {
                cases: &self.cases,
                playbooks: &self.playbooks,
                reports: &self.reports,
                alerts: &self.alerts,
                messages: &self.messages,
            }
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            cases: vec![Case {
                id: "CASE-101".into(),
                server_id: "SRV-Alpha".into(),
                status: CaseStatus::Solved,
                severity: Severity::High,
                deadline: date(),
                analyst: Some("John Doe".into()),
                user_name: "Alice Johnson".into(),
                user_email: "alice.j@company.com".into(),
                case_type: "Phishing".into(),
                notes: Vec::new(),
            }],
            playbooks: vec![Playbook {
                id: "PB-2024-001".into(),
                case_id: "CASE-101".into(),
                title: "Phishing Response Protocol".into(),
                summary: "Steps to isolate and remediate phishing attacks.".into(),
                status: PlaybookStatus::Applied,
                date: date(),
                steps: Vec::new(),
                commands: Vec::new(),
            }],
            reports: vec![Report {
                id: "REP-2024-001".into(),
                case_id: "CASE-101".into(),
                analyst: "John Doe".into(),
                status: ReportStatus::Sent,
                date: date(),
                title: "Phishing Analysis Report".into(),
                body: None,
            }],
            alerts: vec![Alert {
                id: "ALT-001".into(),
                title: "High-Risk Case Detected".into(),
                message: "Potential ransomware activity in Case #125.".into(),
                severity: AlertSeverity::High,
                case_id: Some("CASE-125".into()),
                time: "10 mins ago".into(),
                read: false,
                kind: AlertKind::Ai,
            }],
            messages: vec![Message {
                id: "MSG-001".into(),
                sender: "Alice Johnson".into(),
                role: MessageRole::User,
                content: "I clicked a link in a suspicious email.".into(),
                time: "5 mins ago".into(),
                read: false,
                case_id: Some("CASE-101".into()),
            }],
        }
    }

    #[test]
    fn test_results_follow_collection_order() {
        let fixture = fixture();
        let result = aggregate("phishing", fixture.corpus(), &SearchFilters::default());
        let kinds: Vec<SearchKind> = result.items.iter().map(SearchHit::kind).collect();
        assert_eq!(
            kinds,
            vec![SearchKind::Case, SearchKind::Playbook, SearchKind::Report]
        );
        assert_eq!(result.total_matches, 3);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let fixture = fixture();
        assert!(aggregate("", fixture.corpus(), &SearchFilters::default()).is_empty());
        assert!(aggregate("  \t", fixture.corpus(), &SearchFilters::default()).is_empty());
    }

    #[test]
    fn test_case_id_is_not_searched_for_reports() {
        let fixture = fixture();
        let result = aggregate("case-101", fixture.corpus(), &SearchFilters::default());
        // case id field, not the report/message case references
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].kind(), SearchKind::Case);
    }

    #[test]
    fn test_sender_and_analyst_fields() {
        let fixture = fixture();
        let alice = aggregate("alice", fixture.corpus(), &SearchFilters::default());
        assert_eq!(alice.count(SearchKind::Case), 1);
        assert_eq!(alice.count(SearchKind::Message), 1);

        let john = aggregate("JOHN DOE", fixture.corpus(), &SearchFilters::default());
        assert_eq!(john.count(SearchKind::Report), 1);
        assert_eq!(john.count(SearchKind::Case), 0);
    }

    #[test]
    fn test_filters_restrict_kinds_and_cap_items() {
        let fixture = fixture();
        let filters = SearchFilters {
            kinds: Some(vec![SearchKind::Report, SearchKind::Playbook]),
            max_results: None,
        };
        let result = aggregate("phishing", fixture.corpus(), &filters);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].kind(), SearchKind::Playbook);

        let capped = SearchFilters {
            kinds: None,
            max_results: Some(1),
        };
        let result = aggregate("phishing", fixture.corpus(), &capped);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_matches, 3);
    }

    #[test]
    fn test_hit_display_and_route() {
        let fixture = fixture();
        let result = aggregate("alice", fixture.corpus(), &SearchFilters::default());
        let case_hit = &result.items[0];
        assert_eq!(case_hit.title(), "CASE-101");
        assert_eq!(case_hit.subtitle(), "Phishing - Alice Johnson");
        assert_eq!(case_hit.route().to_string(), "/cases/CASE-101");

        let message_hit = &result.items[1];
        assert_eq!(message_hit.title(), "Alice Johnson");
        assert_eq!(message_hit.route().to_string(), "/cases/CASE-101");
    }

    #[test]
    fn test_hit_serializes_tagged() {
        let fixture = fixture();
        let result = aggregate("ransomware", fixture.corpus(), &SearchFilters::default());
        let json = serde_json::to_value(&result.items[0]).unwrap();
        assert_eq!(json["type"], "alert");
        assert_eq!(json["data"]["id"], "ALT-001");
    }
}
