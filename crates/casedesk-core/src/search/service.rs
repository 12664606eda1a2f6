//! Search service trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::search::{SearchFilters, SearchResult};

/// Service for executing searches across every registry.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Executes a search with the given query.
    ///
    /// # Arguments
    /// * `query` - The search query string, matched case-insensitively
    /// * `filters` - Optional filters to refine search results
    async fn search(&self, query: &str, filters: Option<SearchFilters>) -> Result<SearchResult>;
}
