//! Playbook repository trait.

use async_trait::async_trait;

use super::model::Playbook;
use crate::error::Result;

/// An abstract repository for the playbook registry.
#[async_trait]
pub trait PlaybookRepository: Send + Sync {
    /// Lists every playbook in registry order.
    async fn list_all(&self) -> Result<Vec<Playbook>>;

    async fn find_by_id(&self, playbook_id: &str) -> Result<Option<Playbook>>;

    /// Replaces the stored record with the same id.
    ///
    /// Returns `DeskError::NotFound` if no such playbook exists.
    async fn save(&self, playbook: &Playbook) -> Result<()>;

    /// Removes a playbook. Returns `DeskError::NotFound` if it is absent.
    async fn delete(&self, playbook_id: &str) -> Result<()>;
}
