//! Generic in-memory record table.

use casedesk_core::error::{DeskError, Result};
use tokio::sync::RwLock;

/// A record stored in a [`MemoryTable`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in `NotFound` errors.
    const ENTITY: &'static str;

    fn record_id(&self) -> &str;
}

/// Ordered rows behind an async `RwLock`. Row order is registry order.
pub struct MemoryTable<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Record> MemoryTable<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn list(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.record_id() == id)
            .cloned()
    }

    /// Replaces the row with the same id.
    pub async fn replace(&self, row: &T) -> Result<()> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|existing| existing.record_id() == row.record_id())
            .ok_or_else(|| DeskError::not_found(T::ENTITY, row.record_id()))?;
        *slot = row.clone();
        Ok(())
    }

    /// Removes the row with `id`, preserving the order of the rest.
    pub async fn remove(&self, id: &str) -> Result<T> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|row| row.record_id() == id)
            .ok_or_else(|| DeskError::not_found(T::ENTITY, id))?;
        Ok(rows.remove(index))
    }

    /// Appends a row. Duplicate ids are rejected.
    pub async fn push(&self, row: T) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|existing| existing.record_id() == row.record_id()) {
            return Err(DeskError::data_access(format!(
                "{} '{}' already exists",
                T::ENTITY,
                row.record_id()
            )));
        }
        rows.push(row);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}
