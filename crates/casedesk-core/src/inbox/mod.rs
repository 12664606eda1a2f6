//! Inbox domain module: alerts and user messages.

mod alert;
mod message;
mod repository;

pub use alert::{Alert, AlertKind, AlertQuery, AlertSeverity};
pub use message::{Message, MessageRole, require_text};
pub use repository::{AlertRepository, MessageRepository};
