//! Route table.
//!
//! Paths mirror the dashboard's navigation. Parsing never fails: anything
//! unrecognised becomes [`Route::NotFound`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "id", rename_all = "camelCase")]
pub enum Route {
    Overview,
    Cases,
    CaseDetail(String),
    Playbooks,
    PlaybookDetail(String),
    Reports,
    ReportDetail(String),
    Alerts,
    Search,
    Settings,
    /// Unmatched path, kept verbatim
    NotFound(String),
}

impl Route {
    /// Parses a path. Trailing slashes and surrounding whitespace are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] if trimmed.starts_with('/') => Route::Overview,
            ["cases"] => Route::Cases,
            ["cases", id] => Route::CaseDetail(id.to_string()),
            ["playbooks"] => Route::Playbooks,
            ["playbooks", id] => Route::PlaybookDetail(id.to_string()),
            ["reports"] => Route::Reports,
            ["reports", id] => Route::ReportDetail(id.to_string()),
            ["alerts"] => Route::Alerts,
            ["search"] => Route::Search,
            ["settings"] => Route::Settings,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Overview => write!(f, "/"),
            Route::Cases => write!(f, "/cases"),
            Route::CaseDetail(id) => write!(f, "/cases/{}", id),
            Route::Playbooks => write!(f, "/playbooks"),
            Route::PlaybookDetail(id) => write!(f, "/playbooks/{}", id),
            Route::Reports => write!(f, "/reports"),
            Route::ReportDetail(id) => write!(f, "/reports/{}", id),
            Route::Alerts => write!(f, "/alerts"),
            Route::Search => write!(f, "/search"),
            Route::Settings => write!(f, "/settings"),
            Route::NotFound(path) => write!(f, "{}", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse("/cases"), Route::Cases);
        assert_eq!(Route::parse("/cases/"), Route::Cases);
        assert_eq!(
            Route::parse("/cases/CASE-101"),
            Route::CaseDetail("CASE-101".to_string())
        );
        assert_eq!(
            Route::parse(" /playbooks/PB-2024-001 "),
            Route::PlaybookDetail("PB-2024-001".to_string())
        );
        assert_eq!(
            Route::parse("/reports/REP-2024-002"),
            Route::ReportDetail("REP-2024-002".to_string())
        );
        assert_eq!(Route::parse("/settings"), Route::Settings);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert!(Route::parse("/cases/CASE-101/edit").is_not_found());
        assert!(Route::parse("/dashboard").is_not_found());
        assert!(Route::parse("").is_not_found());
        assert!(Route::parse("alerts/extra").is_not_found());
    }

    #[test]
    fn test_display_round_trips() {
        for path in ["/", "/cases", "/cases/CASE-105", "/alerts", "/search"] {
            assert_eq!(Route::parse(path).to_string(), path);
        }
    }
}
