//! Alert and message repository traits.

use async_trait::async_trait;

use super::alert::Alert;
use super::message::Message;
use crate::error::Result;

#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Lists alerts, newest first.
    async fn list_all(&self) -> Result<Vec<Alert>>;

    async fn find_by_id(&self, alert_id: &str) -> Result<Option<Alert>>;

    /// Replaces the stored alert with the same id.
    async fn save(&self, alert: &Alert) -> Result<()>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Lists messages in feed order.
    async fn list_all(&self) -> Result<Vec<Message>>;

    async fn find_by_id(&self, message_id: &str) -> Result<Option<Message>>;

    /// Replaces the stored message with the same id.
    async fn save(&self, message: &Message) -> Result<()>;

    /// Appends a new message to the end of the feed.
    async fn append(&self, message: Message) -> Result<()>;
}
