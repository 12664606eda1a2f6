//! Search domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::case::Case;
use crate::inbox::{Alert, Message};
use crate::playbook::Playbook;
use crate::report::Report;
use crate::route::Route;

/// Collection a hit came from. Declaration order is output order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchKind {
    Case,
    Playbook,
    Report,
    Alert,
    Message,
}

/// Filters to refine search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Collections to include; `None` includes all of them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<SearchKind>>,

    /// Maximum number of items to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl SearchFilters {
    pub fn includes(&self, kind: SearchKind) -> bool {
        self.kinds
            .as_ref()
            .is_none_or(|kinds| kinds.is_empty() || kinds.contains(&kind))
    }
}

/// A single search hit, tagged with its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchHit {
    Case(Case),
    Playbook(Playbook),
    Report(Report),
    Alert(Alert),
    Message(Message),
}

impl SearchHit {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchHit::Case(_) => SearchKind::Case,
            SearchHit::Playbook(_) => SearchKind::Playbook,
            SearchHit::Report(_) => SearchKind::Report,
            SearchHit::Alert(_) => SearchKind::Alert,
            SearchHit::Message(_) => SearchKind::Message,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchHit::Case(case) => &case.id,
            SearchHit::Playbook(playbook) => &playbook.id,
            SearchHit::Report(report) => &report.id,
            SearchHit::Alert(alert) => &alert.id,
            SearchHit::Message(message) => &message.id,
        }
    }

    /// Headline shown for the hit.
    pub fn title(&self) -> &str {
        match self {
            SearchHit::Case(case) => &case.id,
            SearchHit::Playbook(playbook) => &playbook.title,
            SearchHit::Report(report) => &report.title,
            SearchHit::Alert(alert) => &alert.title,
            SearchHit::Message(message) => &message.sender,
        }
    }

    /// Secondary line shown under the title.
    pub fn subtitle(&self) -> String {
        match self {
            SearchHit::Case(case) => format!("{} - {}", case.case_type, case.user_name),
            SearchHit::Playbook(playbook) => playbook.summary.clone(),
            SearchHit::Report(report) => format!("Report for {}", report.case_id),
            SearchHit::Alert(alert) => alert.message.clone(),
            SearchHit::Message(message) => message.content.clone(),
        }
    }

    /// Page the hit opens. Feed items open their case when they have one.
    pub fn route(&self) -> Route {
        match self {
            SearchHit::Case(case) => Route::CaseDetail(case.id.clone()),
            SearchHit::Playbook(playbook) => Route::PlaybookDetail(playbook.id.clone()),
            SearchHit::Report(report) => Route::ReportDetail(report.id.clone()),
            SearchHit::Alert(Alert { case_id, .. }) | SearchHit::Message(Message { case_id, .. }) => {
                match case_id {
                    Some(case_id) => Route::CaseDetail(case_id.clone()),
                    None => Route::Alerts,
                }
            }
        }
    }
}

/// Result of a search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The query that was executed
    pub query: String,

    /// Hits in collection order, then record order
    pub items: Vec<SearchHit>,

    /// Total number of matches (may be larger than items.len() if limited)
    pub total_matches: usize,
}

impl SearchResult {
    /// Creates a new empty search result.
    pub fn empty(query: String) -> Self {
        Self {
            query,
            items: Vec::new(),
            total_matches: 0,
        }
    }

    /// Creates a new search result with items.
    pub fn new(query: String, items: Vec<SearchHit>) -> Self {
        let total_matches = items.len();
        Self {
            query,
            items,
            total_matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of returned hits of `kind`.
    pub fn count(&self, kind: SearchKind) -> usize {
        self.items.iter().filter(|hit| hit.kind() == kind).count()
    }
}
