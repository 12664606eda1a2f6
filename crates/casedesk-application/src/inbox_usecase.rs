//! Alert and message use cases.

use std::sync::Arc;

use casedesk_core::case::CaseRepository;
use casedesk_core::error::{DeskError, Result};
use casedesk_core::inbox::{
    Alert, AlertQuery, AlertRepository, Message, MessageRepository, require_text,
};

/// Sender name on messages the desk writes.
pub const DEFAULT_SENDER: &str = "SOC Analyst";

pub struct InboxUseCase {
    alerts: Arc<dyn AlertRepository>,
    messages: Arc<dyn MessageRepository>,
    cases: Arc<dyn CaseRepository>,
    sender: String,
}

impl InboxUseCase {
    pub fn new(
        alerts: Arc<dyn AlertRepository>,
        messages: Arc<dyn MessageRepository>,
        cases: Arc<dyn CaseRepository>,
    ) -> Self {
        Self {
            alerts,
            messages,
            cases,
            sender: DEFAULT_SENDER.to_string(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub async fn alerts(&self, query: &AlertQuery) -> Result<Vec<Alert>> {
        Ok(query.apply(self.alerts.list_all().await?))
    }

    pub async fn unread_count(&self) -> Result<usize> {
        Ok(self
            .alerts
            .list_all()
            .await?
            .iter()
            .filter(|alert| !alert.read)
            .count())
    }

    /// Marks an alert read. Marking a read alert again is a no-op.
    pub async fn mark_alert_read(&self, alert_id: &str) -> Result<Alert> {
        let mut alert = self
            .alerts
            .find_by_id(alert_id)
            .await?
            .ok_or_else(|| DeskError::not_found("alert", alert_id))?;
        if alert.mark_read() {
            self.alerts.save(&alert).await?;
            tracing::info!("Alert {} marked read", alert_id);
        }
        Ok(alert)
    }

    /// Marks every alert read and returns how many changed.
    pub async fn mark_all_read(&self) -> Result<usize> {
        let mut changed = 0;
        for mut alert in self.alerts.list_all().await? {
            if alert.mark_read() {
                self.alerts.save(&alert).await?;
                changed += 1;
            }
        }
        tracing::info!("Marked {} alerts read", changed);
        Ok(changed)
    }

    pub async fn messages(&self, unread_only: bool) -> Result<Vec<Message>> {
        let mut messages = self.messages.list_all().await?;
        if unread_only {
            messages.retain(|message| !message.read);
        }
        Ok(messages)
    }

    /// Replies to an inbound message.
    ///
    /// Blank text, or a message the desk wrote itself, is rejected before
    /// anything changes. On success the original is marked read and the
    /// reply is appended to the feed.
    pub async fn reply(&self, message_id: &str, text: &str) -> Result<Message> {
        let mut original = self
            .messages
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| DeskError::not_found("message", message_id))?;
        if !original.is_inbound() {
            return Err(DeskError::validation(format!(
                "Message {} was sent by an analyst and cannot be replied to",
                message_id
            )));
        }
        let reply = Message::outbound(&self.sender, text, original.case_id.clone())?;

        if original.mark_read() {
            self.messages.save(&original).await?;
        }
        self.messages.append(reply.clone()).await?;
        tracing::info!("Replied to message {} as {}", message_id, reply.id);
        Ok(reply)
    }

    /// Sends a message to the affected user of a case.
    pub async fn message_case_user(&self, case_id: &str, text: &str) -> Result<Message> {
        let text = require_text(text)?;
        let case = self
            .cases
            .find_by_id(case_id)
            .await?
            .ok_or_else(|| DeskError::not_found("case", case_id))?;

        let message = Message::outbound(&self.sender, text, Some(case.id.clone()))?;
        self.messages.append(message.clone()).await?;
        tracing::info!(
            "Messaged {} <{}> on case {}",
            case.user_name,
            case.user_email,
            case_id
        );
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_core::inbox::{AlertSeverity, MessageRole};
    use casedesk_infrastructure::memory::{
        InMemoryAlertRepository, InMemoryCaseRepository, InMemoryMessageRepository,
    };

    fn usecase() -> InboxUseCase {
        InboxUseCase::new(
            Arc::new(InMemoryAlertRepository::from_fixtures()),
            Arc::new(InMemoryMessageRepository::from_fixtures()),
            Arc::new(InMemoryCaseRepository::from_fixtures()),
        )
    }

    #[tokio::test]
    async fn test_mark_read_updates_unread_count() {
        let usecase = usecase();
        assert_eq!(usecase.unread_count().await.unwrap(), 2);

        usecase.mark_alert_read("ALT-001").await.unwrap();
        usecase.mark_alert_read("ALT-001").await.unwrap();
        assert_eq!(usecase.unread_count().await.unwrap(), 1);

        assert_eq!(usecase.mark_all_read().await.unwrap(), 1);
        assert_eq!(usecase.unread_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_alert_filter() {
        let usecase = usecase();
        let medium = usecase
            .alerts(&AlertQuery::new().severity(Some(AlertSeverity::Medium)))
            .await
            .unwrap();
        assert_eq!(medium.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_reply_leaves_message_unread() {
        let usecase = usecase();
        let err = usecase.reply("MSG-001", "  ").await.unwrap_err();
        assert!(err.is_validation());

        let unread = usecase.messages(true).await.unwrap();
        assert!(unread.iter().any(|m| m.id == "MSG-001"));
        assert_eq!(usecase.messages(false).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_reply_marks_read_and_appends() {
        let usecase = usecase().with_sender("Harvey Specter");
        let reply = usecase
            .reply("MSG-001", "Disconnect your machine from the network.")
            .await
            .unwrap();
        assert_eq!(reply.role, MessageRole::Analyst);
        assert_eq!(reply.sender, "Harvey Specter");
        assert_eq!(reply.case_id.as_deref(), Some("CASE-125"));

        let all = usecase.messages(false).await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.iter().find(|m| m.id == "MSG-001").unwrap().read);
        assert_eq!(all.last().unwrap().id, reply.id);
    }

    #[tokio::test]
    async fn test_reply_to_analyst_message_is_rejected() {
        let usecase = usecase();
        let reply = usecase.reply("MSG-001", "Checking now.").await.unwrap();

        let err = usecase.reply(&reply.id, "Following up.").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(usecase.messages(false).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_message_case_user() {
        let usecase = usecase();
        let message = usecase
            .message_case_user("CASE-112", "Please confirm your travel dates.")
            .await
            .unwrap();
        assert_eq!(message.case_id.as_deref(), Some("CASE-112"));

        assert!(usecase
            .message_case_user("CASE-112", "")
            .await
            .unwrap_err()
            .is_validation());
        assert!(usecase
            .message_case_user("CASE-999", "hello")
            .await
            .unwrap_err()
            .is_not_found());
    }
}
