//! Playbook use cases.

use std::sync::Arc;

use casedesk_core::error::{DeskError, Result};
use casedesk_core::playbook::{
    Playbook, PlaybookAction, PlaybookQuery, PlaybookRepository, Transition,
};
use serde::Serialize;

/// What performing an action did to the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "playbook", rename_all = "lowercase")]
pub enum PlaybookOutcome {
    /// Status changed; holds the stored record
    Updated(Playbook),
    /// Action accepted without a status change
    Unchanged(Playbook),
    /// Record removed; holds its id
    Deleted(String),
}

pub struct PlaybookUseCase {
    playbooks: Arc<dyn PlaybookRepository>,
}

impl PlaybookUseCase {
    pub fn new(playbooks: Arc<dyn PlaybookRepository>) -> Self {
        Self { playbooks }
    }

    pub async fn list(&self, query: &PlaybookQuery) -> Result<Vec<Playbook>> {
        Ok(query.apply(self.playbooks.list_all().await?))
    }

    pub async fn show(&self, playbook_id: &str) -> Result<Playbook> {
        self.playbooks
            .find_by_id(playbook_id)
            .await?
            .ok_or_else(|| DeskError::not_found("playbook", playbook_id))
    }

    /// Performs `action`. Actions the current status does not offer fail
    /// with `InvalidTransition` and leave the record untouched.
    pub async fn perform(&self, playbook_id: &str, action: PlaybookAction) -> Result<PlaybookOutcome> {
        let mut playbook = self.show(playbook_id).await?;
        let from = playbook.status;

        let outcome = match playbook.apply(action)? {
            Transition::To(status) => {
                self.playbooks.save(&playbook).await?;
                tracing::info!("Playbook {} {} -> {} via {}", playbook_id, from, status, action);
                PlaybookOutcome::Updated(playbook)
            }
            Transition::Stay => {
                tracing::info!("Playbook {} {} (status {})", playbook_id, action, from);
                PlaybookOutcome::Unchanged(playbook)
            }
            Transition::Delete => {
                self.playbooks.delete(playbook_id).await?;
                tracing::info!("Playbook {} deleted from status {}", playbook_id, from);
                PlaybookOutcome::Deleted(playbook_id.to_string())
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_core::playbook::PlaybookStatus;
    use casedesk_infrastructure::memory::InMemoryPlaybookRepository;

    fn usecase() -> PlaybookUseCase {
        PlaybookUseCase::new(Arc::new(InMemoryPlaybookRepository::from_fixtures()))
    }

    #[tokio::test]
    async fn test_accept_then_mark_applied() {
        let usecase = usecase();
        let outcome = usecase
            .perform("PB-2024-003", PlaybookAction::Accept)
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            PlaybookOutcome::Updated(ref p) if p.status == PlaybookStatus::InProgress
        ));

        usecase
            .perform("PB-2024-003", PlaybookAction::MarkApplied)
            .await
            .unwrap();
        assert_eq!(
            usecase.show("PB-2024-003").await.unwrap().status,
            PlaybookStatus::Applied
        );
    }

    #[tokio::test]
    async fn test_rejected_action_leaves_record() {
        let usecase = usecase();
        let err = usecase
            .perform("PB-2024-001", PlaybookAction::StopUsing)
            .await
            .unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(
            usecase.show("PB-2024-001").await.unwrap().status,
            PlaybookStatus::Applied
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let usecase = usecase();
        let outcome = usecase
            .perform("PB-2024-004", PlaybookAction::Delete)
            .await
            .unwrap();
        assert_eq!(outcome, PlaybookOutcome::Deleted("PB-2024-004".to_string()));
        assert!(usecase.show("PB-2024-004").await.unwrap_err().is_not_found());
        assert_eq!(usecase.list(&PlaybookQuery::new()).await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_regenerate_is_unchanged() {
        let usecase = usecase();
        let outcome = usecase
            .perform("PB-2024-009", PlaybookAction::Regenerate)
            .await
            .unwrap();
        assert!(matches!(outcome, PlaybookOutcome::Unchanged(_)));
    }
}
