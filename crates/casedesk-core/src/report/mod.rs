//! Report domain module.

mod model;
mod query;
mod repository;

pub use model::{Report, ReportStatus};
pub use query::ReportQuery;
pub use repository::ReportRepository;
