//! Report repository trait.

use async_trait::async_trait;

use super::model::Report;
use crate::error::Result;

/// An abstract repository for the report registry.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Report>>;

    async fn find_by_id(&self, report_id: &str) -> Result<Option<Report>>;

    /// Replaces the stored record with the same id.
    ///
    /// Returns `DeskError::NotFound` if no such report exists.
    async fn save(&self, report: &Report) -> Result<()>;
}
