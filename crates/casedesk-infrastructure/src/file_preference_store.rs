//! JSON-file preference store.
//!
//! One JSON object of string values at `<data_dir>/local_storage.json`.
//! Values are cached in memory; every write merges into the file under a
//! lock so keys written by another process survive. Concurrent writers to
//! the same key are last-write-wins.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use casedesk_core::error::{DeskError, Result};
use casedesk_core::preference::{CHANGE_CHANNEL_CAPACITY, PreferenceChange, PreferenceStore};
use tokio::sync::{Mutex, broadcast};

use crate::storage::AtomicJsonFile;

type Document = BTreeMap<String, String>;

/// File-backed [`PreferenceStore`].
pub struct FilePreferenceStore {
    file: Arc<AtomicJsonFile<Document>>,
    cache: Mutex<Document>,
    changes: broadcast::Sender<PreferenceChange>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable one is logged and reset to empty.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicJsonFile::<Document>::new(path));

        let loader = file.clone();
        let initial = tokio::task::spawn_blocking(move || match loader.load() {
            Ok(doc) => Ok(doc.unwrap_or_default()),
            Err(err) if err.is_serialization() => {
                tracing::warn!(
                    "Preference file {} is corrupt, starting empty: {}",
                    loader.path().display(),
                    err
                );
                loader.save(&Document::new())?;
                Ok(Document::new())
            }
            Err(err) => Err(err),
        })
        .await
        .map_err(|e| DeskError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!(
            "Opened preference store {} ({} keys)",
            file.path().display(),
            initial.len()
        );

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            file,
            cache: Mutex::new(initial),
            changes,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Applies `edit` to the on-disk document and refreshes the cache.
    async fn write<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Document) + Send + 'static,
    {
        let mut cache = self.cache.lock().await;
        let file = self.file.clone();
        let merged = tokio::task::spawn_blocking(move || {
            file.update(Document::new(), |doc| {
                edit(doc);
                Ok(doc.clone())
            })
        })
        .await
        .map_err(|e| DeskError::internal(format!("Failed to join task: {}", e)))??;
        *cache = merged;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let (k, v) = (key.to_string(), value.to_string());
        self.write(move |doc| {
            doc.insert(k, v);
        })
        .await?;
        tracing::debug!("Stored preference {}", key);
        let _ = self.changes.send(PreferenceChange::set(key, value));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let k = key.to_string();
        self.write(move |doc| {
            doc.remove(&k);
        })
        .await?;
        let _ = self.changes.send(PreferenceChange::removed(key));
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<PreferenceChange> {
        self.changes.subscribe()
    }
}
