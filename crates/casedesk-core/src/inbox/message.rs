//! Messages exchanged between affected users and analysts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::error::{DeskError, Result};
use crate::filter::FieldExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MessageRole {
    User,
    Analyst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub role: MessageRole,
    pub content: String,
    /// Relative time as displayed
    pub time: String,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

fn content_field(message: &Message) -> &str {
    &message.content
}

fn sender_field(message: &Message) -> &str {
    &message.sender
}

/// Rejects blank message text, returning the trimmed content.
pub fn require_text(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DeskError::validation("Message text cannot be empty"));
    }
    Ok(text)
}

impl Message {
    /// Fields the global search aggregator matches against.
    pub const SEARCH_FIELDS: &'static [FieldExtractor<Message>] = &[content_field, sender_field];

    /// Builds an analyst-authored message. Outbound messages are born read.
    pub fn outbound(sender: &str, content: &str, case_id: Option<String>) -> Result<Self> {
        let content = require_text(content)?;
        Ok(Self {
            id: format!("MSG-{}", Uuid::new_v4()),
            sender: sender.to_string(),
            role: MessageRole::Analyst,
            content: content.to_string(),
            time: "Just now".to_string(),
            read: true,
            case_id,
        })
    }

    pub fn is_inbound(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Returns true if the message was unread.
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_rejects_blank() {
        let err = Message::outbound("SOC Analyst", "   ", None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_outbound_ids_are_unique() {
        let a = Message::outbound("SOC Analyst", "On it.", Some("CASE-101".into())).unwrap();
        let b = Message::outbound("SOC Analyst", "On it.", None).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("MSG-"));
        assert_eq!(a.role, MessageRole::Analyst);
        assert!(a.read);
        assert!(!a.is_inbound());
        assert_eq!(a.case_id.as_deref(), Some("CASE-101"));
    }

    #[test]
    fn test_outbound_trims_content() {
        let message = Message::outbound("SOC Analyst", "  Resetting now \n", None).unwrap();
        assert_eq!(message.content, "Resetting now");
    }
}
