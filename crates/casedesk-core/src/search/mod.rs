//! Search domain module.

mod aggregate;
mod highlight;
mod model;
mod service;

pub use aggregate::{SearchCorpus, aggregate};
pub use highlight::{Segment, highlight};
pub use model::{SearchFilters, SearchHit, SearchKind, SearchResult};
pub use service::SearchService;
