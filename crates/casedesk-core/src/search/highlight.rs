//! Match highlighting.
//!
//! The query is matched literally: it is escaped before being compiled, so
//! input like `c++ (` splits on the text itself instead of failing.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// A run of text, flagged if it matches the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Splits `text` around case-insensitive occurrences of `query`.
///
/// An empty query yields the whole text as one unmatched segment. Empty
/// runs between adjacent matches are dropped.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!("highlight pattern rejected for {:?}: {}", query, err);
            return vec![Segment::new(text, false)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::new(&text[last..found.start()], false));
        }
        segments.push(Segment::new(found.as_str(), true));
        last = found.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment::new(&text[last..], false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn test_case_insensitive_split() {
        let segments = highlight("Phishing Response Protocol - phishing", "PHISH");
        assert_eq!(render(&segments), "[Phish]ing Response Protocol - [phish]ing");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let segments = highlight("Learning c++ (advanced) and c", "c++ (");
        assert_eq!(render(&segments), "Learning [c++ (]advanced) and c");

        let segments = highlight("a.b.c", ".");
        assert_eq!(render(&segments), "a[.]b[.]c");

        let segments = highlight("cost: $5 [approx]", "$5 [");
        assert_eq!(render(&segments), "cost: [$5 []approx]");
    }

    #[test]
    fn test_no_match_and_empty_query() {
        assert_eq!(highlight("Malware", "ransom"), vec![Segment::new("Malware", false)]);
        assert_eq!(highlight("Malware", ""), vec![Segment::new("Malware", false)]);
        assert_eq!(highlight("", "x"), vec![Segment::new("", false)]);
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(highlight("Phishing", "phishing"), vec![Segment::new("Phishing", true)]);
    }
}
