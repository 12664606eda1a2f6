//! Preference store trait.
//!
//! A string-keyed, string-valued store with change notification. Values are
//! opaque to the store; typed lists and the theme encode themselves.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::Result;

/// Key holding the theme as a plain string.
pub const THEME_KEY: &str = "theme";
/// Key holding the pinned case ids as a JSON array.
pub const PINNED_CASES_KEY: &str = "pinnedCases";
/// Key holding recent search terms as a JSON array.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Capacity of the change channel handed to subscribers.
pub const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// A write observed by the store. `value` is `None` for removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceChange {
    pub key: String,
    pub value: Option<String>,
}

impl PreferenceChange {
    pub fn set(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn removed(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: None,
        }
    }
}

/// Key-value store for local preferences.
///
/// Every `set`/`remove` is durable when it returns and is then broadcast to
/// all current subscribers.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Subscribes to future changes.
    fn subscribe(&self) -> broadcast::Receiver<PreferenceChange>;
}
