//! Pinned case ids.

use serde::{Deserialize, Serialize};

use super::decode_list;
use super::store::PINNED_CASES_KEY;

/// What a pin toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinToggle {
    Pinned,
    Unpinned,
}

/// Ordered set of pinned case ids, oldest pin first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedCases(Vec<String>);

impl PinnedCases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the stored JSON array. Missing or corrupt values are empty.
    pub fn decode(raw: Option<&str>) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in decode_list(PINNED_CASES_KEY, raw) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Removes `case_id` if present, otherwise appends it.
    pub fn toggle(&mut self, case_id: &str) -> PinToggle {
        match self.0.iter().position(|id| id == case_id) {
            Some(index) => {
                self.0.remove(index);
                PinToggle::Unpinned
            }
            None => {
                self.0.push(case_id.to_string());
                PinToggle::Pinned
            }
        }
    }

    pub fn contains(&self, case_id: &str) -> bool {
        self.0.iter().any(|id| id == case_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut pinned = PinnedCases::decode(Some(r#"["CASE-105"]"#));
        let before = pinned.clone();
        assert_eq!(pinned.toggle("CASE-101"), PinToggle::Pinned);
        assert_eq!(pinned.ids(), ["CASE-105", "CASE-101"]);
        assert_eq!(pinned.toggle("CASE-101"), PinToggle::Unpinned);
        assert_eq!(pinned, before);
    }

    #[test]
    fn test_encode_matches_stored_format() {
        let mut pinned = PinnedCases::new();
        pinned.toggle("CASE-101");
        assert_eq!(pinned.encode(), r#"["CASE-101"]"#);
        pinned.toggle("CASE-101");
        assert_eq!(pinned.encode(), "[]");
    }

    #[test]
    fn test_decode_tolerates_garbage() {
        assert!(PinnedCases::decode(None).is_empty());
        assert!(PinnedCases::decode(Some("not json")).is_empty());
        assert!(PinnedCases::decode(Some(r#"{"a":1}"#)).is_empty());
        let deduped = PinnedCases::decode(Some(r#"["A","B","A"]"#));
        assert_eq!(deduped.ids(), ["A", "B"]);
    }
}
