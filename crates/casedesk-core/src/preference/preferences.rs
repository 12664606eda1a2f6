//! Typed access to the preference store.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::pinned::{PinToggle, PinnedCases};
use super::recent::RecentSearches;
use super::store::{
    PINNED_CASES_KEY, PreferenceChange, PreferenceStore, RECENT_SEARCHES_KEY, THEME_KEY,
};
use super::theme::Theme;
use crate::error::Result;

/// Reads and writes the three dashboard preferences through a
/// [`PreferenceStore`]. Each mutation is read-modify-write and persists
/// before returning.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    default_theme: Theme,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            default_theme: Theme::default(),
        }
    }

    /// Theme reported when none is stored.
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceChange> {
        self.store.subscribe()
    }

    pub async fn pinned_cases(&self) -> Result<PinnedCases> {
        let raw = self.store.get(PINNED_CASES_KEY).await?;
        Ok(PinnedCases::decode(raw.as_deref()))
    }

    /// Toggles `case_id` in the pinned set and persists the new set.
    pub async fn toggle_pin(&self, case_id: &str) -> Result<PinToggle> {
        let mut pinned = self.pinned_cases().await?;
        let outcome = pinned.toggle(case_id);
        self.store.set(PINNED_CASES_KEY, &pinned.encode()).await?;
        Ok(outcome)
    }

    pub async fn recent_searches(&self) -> Result<RecentSearches> {
        let raw = self.store.get(RECENT_SEARCHES_KEY).await?;
        Ok(RecentSearches::decode(raw.as_deref()))
    }

    /// Records a submitted search term. Writes only when the list changes.
    pub async fn record_search(&self, term: &str) -> Result<RecentSearches> {
        let mut recent = self.recent_searches().await?;
        if recent.push(term) {
            self.store.set(RECENT_SEARCHES_KEY, &recent.encode()).await?;
        }
        Ok(recent)
    }

    pub async fn clear_recent_searches(&self) -> Result<()> {
        self.store.remove(RECENT_SEARCHES_KEY).await
    }

    pub async fn theme(&self) -> Result<Theme> {
        let raw = self.store.get(THEME_KEY).await?;
        Ok(Theme::decode(raw.as_deref(), self.default_theme))
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, &theme.encode()).await
    }
}
