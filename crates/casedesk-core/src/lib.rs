//! Domain layer for the CaseDesk security-operations dashboard.
//!
//! Models, lifecycles and repository/store traits. Nothing here performs
//! I/O; implementations live in `casedesk-infrastructure`.

pub mod case;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod inbox;
pub mod playbook;
pub mod preference;
pub mod report;
pub mod route;
pub mod search;

// Re-export common error type
pub use error::{DeskError, Result};
