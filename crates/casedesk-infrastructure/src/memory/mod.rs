//! In-memory registries.

mod repositories;
mod table;

pub use repositories::{
    InMemoryAlertRepository, InMemoryCaseRepository, InMemoryMessageRepository,
    InMemoryPlaybookRepository, InMemoryReportRepository,
};
pub use table::{MemoryTable, Record};
