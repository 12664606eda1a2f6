//! In-memory preference store.

use std::collections::HashMap;

use async_trait::async_trait;
use casedesk_core::error::Result;
use casedesk_core::preference::{CHANGE_CHANNEL_CAPACITY, PreferenceChange, PreferenceStore};
use tokio::sync::{RwLock, broadcast};

/// Non-persistent [`PreferenceStore`], used in tests and `--ephemeral` runs.
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
    changes: broadcast::Sender<PreferenceChange>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            values: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Seeds the store with `entries`. No change events are sent.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
            ..store
        }
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        // No receivers is fine
        let _ = self.changes.send(PreferenceChange::set(key, value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.values.write().await.remove(key).is_some() {
            let _ = self.changes.send(PreferenceChange::removed(key));
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<PreferenceChange> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("theme").await.unwrap().is_none());

        store.set("theme", "dark").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));

        store.remove("theme").await.unwrap();
        assert!(store.get("theme").await.unwrap().is_none());
        store.remove("theme").await.unwrap();
    }

    #[tokio::test]
    async fn test_subscribers_see_writes() {
        let store = MemoryPreferenceStore::with_entries([("theme", "light")]);
        let mut rx = store.subscribe();

        store.set("pinnedCases", "[\"CASE-101\"]").await.unwrap();
        store.remove("theme").await.unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            PreferenceChange::set("pinnedCases", "[\"CASE-101\"]")
        );
        assert_eq!(rx.recv().await.unwrap(), PreferenceChange::removed("theme"));
    }
}
