//! Recent search terms.

use serde::{Deserialize, Serialize};

use super::decode_list;
use super::store::RECENT_SEARCHES_KEY;

/// Newest-first list of distinct search terms, capped at [`RecentSearches::MAX`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    pub const MAX: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the stored JSON array, restoring the cap and uniqueness.
    pub fn decode(raw: Option<&str>) -> Self {
        let mut recent = Self::new();
        for term in decode_list(RECENT_SEARCHES_KEY, raw) {
            if recent.0.len() < Self::MAX && !recent.0.contains(&term) {
                recent.0.push(term);
            }
        }
        recent
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Puts `term` at the front. An existing term moves up instead of
    /// repeating. Blank terms are ignored.
    ///
    /// Returns true if the list changed.
    pub fn push(&mut self, term: &str) -> bool {
        if term.trim().is_empty() {
            return false;
        }
        match self.0.iter().position(|t| t == term) {
            Some(0) => return false,
            Some(index) => {
                self.0.remove(index);
            }
            None => {}
        }
        self.0.insert(0, term.to_string());
        self.0.truncate(Self::MAX);
        true
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
