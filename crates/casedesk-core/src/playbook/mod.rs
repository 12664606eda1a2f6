//! Playbook domain module.
//!
//! - `model`: `Playbook`, `PlaybookStatus`
//! - `lifecycle`: actions offered per status and the transitions they cause
//! - `query`: table filtering
//! - `repository`: persistence trait

mod lifecycle;
mod model;
mod query;
mod repository;

pub use lifecycle::{PlaybookAction, Transition};
pub use model::{Playbook, PlaybookStatus};
pub use query::PlaybookQuery;
pub use repository::PlaybookRepository;
