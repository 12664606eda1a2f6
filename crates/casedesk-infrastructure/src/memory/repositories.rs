//! In-memory implementations of the registry repositories.
//!
//! Each wraps a [`MemoryTable`] seeded from [`crate::fixtures`] or from
//! caller-supplied rows.

use async_trait::async_trait;
use casedesk_core::case::{Case, CaseRepository};
use casedesk_core::error::Result;
use casedesk_core::inbox::{Alert, AlertRepository, Message, MessageRepository};
use casedesk_core::playbook::{Playbook, PlaybookRepository};
use casedesk_core::report::{Report, ReportRepository};

use super::table::{MemoryTable, Record};
use crate::fixtures;

impl Record for Case {
    const ENTITY: &'static str = "case";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Playbook {
    const ENTITY: &'static str = "playbook";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Report {
    const ENTITY: &'static str = "report";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Alert {
    const ENTITY: &'static str = "alert";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Message {
    const ENTITY: &'static str = "message";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Case registry held in process memory.
pub struct InMemoryCaseRepository {
    table: MemoryTable<Case>,
}

impl InMemoryCaseRepository {
    pub fn new(cases: Vec<Case>) -> Self {
        Self {
            table: MemoryTable::new(cases),
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::cases())
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn list_all(&self) -> Result<Vec<Case>> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, case_id: &str) -> Result<Option<Case>> {
        Ok(self.table.find(case_id).await)
    }

    async fn save(&self, case: &Case) -> Result<()> {
        self.table.replace(case).await
    }
}

pub struct InMemoryPlaybookRepository {
    table: MemoryTable<Playbook>,
}

impl InMemoryPlaybookRepository {
    pub fn new(playbooks: Vec<Playbook>) -> Self {
        Self {
            table: MemoryTable::new(playbooks),
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::playbooks())
    }
}

#[async_trait]
impl PlaybookRepository for InMemoryPlaybookRepository {
    async fn list_all(&self) -> Result<Vec<Playbook>> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, playbook_id: &str) -> Result<Option<Playbook>> {
        Ok(self.table.find(playbook_id).await)
    }

    async fn save(&self, playbook: &Playbook) -> Result<()> {
        self.table.replace(playbook).await
    }

    async fn delete(&self, playbook_id: &str) -> Result<()> {
        self.table.remove(playbook_id).await.map(|_| ())
    }
}

pub struct InMemoryReportRepository {
    table: MemoryTable<Report>,
}

impl InMemoryReportRepository {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            table: MemoryTable::new(reports),
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::reports())
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn list_all(&self) -> Result<Vec<Report>> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, report_id: &str) -> Result<Option<Report>> {
        Ok(self.table.find(report_id).await)
    }

    async fn save(&self, report: &Report) -> Result<()> {
        self.table.replace(report).await
    }
}

pub struct InMemoryAlertRepository {
    table: MemoryTable<Alert>,
}

impl InMemoryAlertRepository {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            table: MemoryTable::new(alerts),
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::alerts())
    }
}

#[async_trait]
impl AlertRepository for InMemoryAlertRepository {
    async fn list_all(&self) -> Result<Vec<Alert>> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, alert_id: &str) -> Result<Option<Alert>> {
        Ok(self.table.find(alert_id).await)
    }

    async fn save(&self, alert: &Alert) -> Result<()> {
        self.table.replace(alert).await
    }
}

pub struct InMemoryMessageRepository {
    table: MemoryTable<Message>,
}

impl InMemoryMessageRepository {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            table: MemoryTable::new(messages),
        }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::messages())
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list_all(&self) -> Result<Vec<Message>> {
        Ok(self.table.list().await)
    }

    async fn find_by_id(&self, message_id: &str) -> Result<Option<Message>> {
        Ok(self.table.find(message_id).await)
    }

    async fn save(&self, message: &Message) -> Result<()> {
        self.table.replace(message).await
    }

    async fn append(&self, message: Message) -> Result<()> {
        self.table.push(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_core::case::CaseStatus;
    use casedesk_core::playbook::PlaybookStatus;

    #[tokio::test]
    async fn test_case_save_round_trip() {
        let repo = InMemoryCaseRepository::from_fixtures();
        let mut case = repo.find_by_id("CASE-112").await.unwrap().unwrap();
        case.set_status(CaseStatus::Solved);
        repo.save(&case).await.unwrap();

        let stored = repo.find_by_id("CASE-112").await.unwrap().unwrap();
        assert_eq!(stored.status, CaseStatus::Solved);
        assert_eq!(repo.list_all().await.unwrap()[2].id, "CASE-112");
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let repo = InMemoryCaseRepository::from_fixtures();
        assert!(repo.find_by_id("CASE-999").await.unwrap().is_none());

        let playbooks = InMemoryPlaybookRepository::from_fixtures();
        assert!(playbooks.delete("PB-404").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_playbook_delete() {
        let repo = InMemoryPlaybookRepository::from_fixtures();
        let before = repo.list_all().await.unwrap().len();
        let pb = repo.find_by_id("PB-2024-004").await.unwrap().unwrap();
        assert_eq!(pb.status, PlaybookStatus::Rejected);

        repo.delete("PB-2024-004").await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), before - 1);
        assert!(repo.find_by_id("PB-2024-004").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_message_append() {
        let repo = InMemoryMessageRepository::from_fixtures();
        let message = Message::outbound("SOC Analyst", "We are on it.", None).unwrap();
        let id = message.id.clone();
        repo.append(message).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.last().unwrap().id, id);
    }
}
