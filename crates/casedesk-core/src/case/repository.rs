//! Case repository trait.
//!
//! Defines the interface for case persistence operations.

use async_trait::async_trait;

use super::model::Case;
use crate::error::Result;

/// An abstract repository for the case registry.
///
/// Decouples case use cases from where case records come from (the
/// built-in fixture today, a case-management backend later).
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Lists every case in registry order.
    async fn list_all(&self) -> Result<Vec<Case>>;

    /// Finds a case by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Case))`: Case found
    /// - `Ok(None)`: No case with that code
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, case_id: &str) -> Result<Option<Case>>;

    /// Replaces the stored record with the same id.
    ///
    /// Returns `DeskError::NotFound` if no such case exists; the registry
    /// never grows through `save`.
    async fn save(&self, case: &Case) -> Result<()>;
}
