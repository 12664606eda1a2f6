//! Case domain module.
//!
//! - `model`: `Case`, `CaseStatus`, `Severity`
//! - `query`: table filtering, sorting and pagination
//! - `repository`: persistence trait

mod model;
mod query;
mod repository;

pub use model::{Case, CaseStatus, Severity};
pub use query::{Assignment, CaseQuery, CaseSort};
pub use repository::CaseRepository;
