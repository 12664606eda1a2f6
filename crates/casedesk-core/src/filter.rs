//! Predicate composition shared by every registry table and the search
//! aggregator.
//!
//! A [`Filter`] is a conjunction of independent predicates. Text predicates
//! are parameterised by [`FieldExtractor`]s so each table only declares
//! *which* fields it searches, never *how*.

use serde::{Deserialize, Serialize};

/// Borrows one searchable text field out of a record.
pub type FieldExtractor<T> = for<'a> fn(&'a T) -> &'a str;

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Returns true if any of `fields` contains `query` (case-insensitive).
///
/// An empty query matches everything, the same as typing nothing into a
/// table's search box.
pub fn matches_text<T>(item: &T, query: &str, fields: &[FieldExtractor<T>]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| contains_ignore_case(field(item), &needle))
}

/// A conjunction of predicates over `T`.
///
/// # Example
///
/// ```
/// use casedesk_core::filter::{FieldExtractor, Filter};
///
/// struct Row { name: String, level: u8 }
/// fn name(r: &Row) -> &str { &r.name }
/// const FIELDS: &[FieldExtractor<Row>] = &[name];
///
/// let rows = vec![
///     Row { name: "alpha".into(), level: 1 },
///     Row { name: "beta".into(), level: 2 },
/// ];
/// let filter = Filter::new().text("ALP", FIELDS).one_of(|r: &Row| r.level, vec![1, 3]);
/// let hits = filter.apply(&rows);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "alpha");
/// ```
pub struct Filter<'a, T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T: 'a> Default for Filter<'a, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T: 'a> Filter<'a, T> {
    /// Creates a filter that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a case-insensitive text predicate over `fields`.
    pub fn text(mut self, query: &str, fields: &'a [FieldExtractor<T>]) -> Self {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.predicates.push(Box::new(move |item: &T| {
            fields
                .iter()
                .any(|field| contains_ignore_case(field(item), &needle))
        }));
        self
    }

    /// Adds a set-membership predicate. An empty `allowed` set adds no constraint.
    pub fn one_of<V, F>(mut self, extract: F, allowed: Vec<V>) -> Self
    where
        V: PartialEq + 'a,
        F: Fn(&T) -> V + 'a,
    {
        if allowed.is_empty() {
            return self;
        }
        self.predicates
            .push(Box::new(move |item: &T| allowed.contains(&extract(item))));
        self
    }

    /// Adds an arbitrary predicate.
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns true if every predicate accepts `item`.
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Borrows the matching items, preserving input order.
    pub fn apply<'i>(&self, items: &'i [T]) -> Vec<&'i T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Consumes `items` and keeps the matching ones, preserving order.
    pub fn retain(&self, mut items: Vec<T>) -> Vec<T> {
        items.retain(|item| self.matches(item));
        items
    }
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
    pub number: usize,
    pub page_count: usize,
}

impl<T> Page<T> {
    /// Slices `items` according to `request`. A page past the end is empty.
    ///
    /// Zero page numbers and sizes are treated as 1, since a request may
    /// arrive deserialized rather than through [`PageRequest::new`].
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let number = request.number.max(1);
        let size = request.size.max(1);
        let total = items.len();
        let page_count = total.div_ceil(size).max(1);
        let start = (number - 1).saturating_mul(size);
        let items = items.into_iter().skip(start).take(size).collect();
        Self {
            items,
            total,
            number,
            page_count,
        }
    }

    /// Wraps an unpaginated collection as a single page.
    pub fn single(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            total,
            number: 1,
            page_count: 1,
        }
    }
}
