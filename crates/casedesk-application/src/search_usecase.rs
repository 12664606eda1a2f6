//! Search page use cases: searching and the recent-search list.

use std::sync::Arc;

use casedesk_core::error::Result;
use casedesk_core::preference::{Preferences, RecentSearches};
use casedesk_core::search::{SearchFilters, SearchResult, SearchService};

pub struct SearchUseCase {
    search_service: Arc<dyn SearchService>,
    preferences: Preferences,
}

impl SearchUseCase {
    pub fn new(search_service: Arc<dyn SearchService>, preferences: Preferences) -> Self {
        Self {
            search_service,
            preferences,
        }
    }

    /// Live search as the query is typed. Does not touch recent searches.
    pub async fn search(&self, query: &str, filters: Option<SearchFilters>) -> Result<SearchResult> {
        self.search_service.search(query, filters).await
    }

    /// Explicit submission: records the term, then searches.
    pub async fn submit(&self, query: &str, filters: Option<SearchFilters>) -> Result<SearchResult> {
        self.preferences.record_search(query).await?;
        let result = self.search_service.search(query, filters).await?;
        tracing::info!("Search {:?} submitted, {} hits", query, result.total_matches);
        Ok(result)
    }

    pub async fn recent(&self) -> Result<RecentSearches> {
        self.preferences.recent_searches().await
    }

    pub async fn clear_recent(&self) -> Result<()> {
        self.preferences.clear_recent_searches().await?;
        tracing::info!("Recent searches cleared");
        Ok(())
    }
}
