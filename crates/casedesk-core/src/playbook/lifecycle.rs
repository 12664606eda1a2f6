//! Playbook status lifecycle.
//!
//! ```text
//! Not Used ──accept──▶ In-progress ──mark applied──▶ Applied (terminal)
//!    │   ▲                  │
//!    │   └───stop using─────┘
//!    └──reject──▶ Rejected
//! Not Used / Rejected ──delete──▶ (removed)
//! ```
//!
//! Every other offered action (edit, notes, report views, regenerate,
//! feedback) leaves the status where it is.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::model::PlaybookStatus;
use crate::error::{DeskError, Result};

/// An action an analyst can take on a playbook.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PlaybookAction {
    Accept,
    Reject,
    Edit,
    ApplyToCase,
    Delete,
    MarkApplied,
    AddNotes,
    StopUsing,
    GenerateReport,
    ViewReportHistory,
    ViewTimeline,
    Regenerate,
    ProvideFeedback,
}

/// Outcome of an accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "lowercase")]
pub enum Transition {
    /// Status moves to the given value
    To(PlaybookStatus),
    /// Action accepted, status unchanged
    Stay,
    /// Record must be removed from the registry
    Delete,
}

use PlaybookAction::*;

const NOT_USED_ACTIONS: &[PlaybookAction] = &[Accept, Reject, Edit, ApplyToCase, Delete];
const IN_PROGRESS_ACTIONS: &[PlaybookAction] = &[MarkApplied, Edit, AddNotes, StopUsing];
const APPLIED_ACTIONS: &[PlaybookAction] = &[GenerateReport, ViewReportHistory, ViewTimeline];
const REJECTED_ACTIONS: &[PlaybookAction] = &[Regenerate, ProvideFeedback, Delete];

impl PlaybookStatus {
    /// Actions offered in this status, in display order.
    pub fn available_actions(&self) -> &'static [PlaybookAction] {
        match self {
            PlaybookStatus::NotUsed => NOT_USED_ACTIONS,
            PlaybookStatus::InProgress => IN_PROGRESS_ACTIONS,
            PlaybookStatus::Applied => APPLIED_ACTIONS,
            PlaybookStatus::Rejected => REJECTED_ACTIONS,
        }
    }

    pub fn offers(&self, action: PlaybookAction) -> bool {
        self.available_actions().contains(&action)
    }

    /// No action moves a playbook out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlaybookStatus::Applied)
    }

    /// Resolves `action` against this status.
    pub fn transition(&self, action: PlaybookAction) -> Result<Transition> {
        if !self.offers(action) {
            return Err(DeskError::invalid_transition(
                "playbook",
                self,
                action.to_string().replace('-', " "),
            ));
        }
        let transition = match (self, action) {
            (PlaybookStatus::NotUsed, Accept) => Transition::To(PlaybookStatus::InProgress),
            (PlaybookStatus::NotUsed, Reject) => Transition::To(PlaybookStatus::Rejected),
            (PlaybookStatus::InProgress, MarkApplied) => Transition::To(PlaybookStatus::Applied),
            (PlaybookStatus::InProgress, StopUsing) => Transition::To(PlaybookStatus::NotUsed),
            (_, Delete) => Transition::Delete,
            _ => Transition::Stay,
        };
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_not_used_transitions() {
        let status = PlaybookStatus::NotUsed;
        assert_eq!(
            status.transition(Accept).unwrap(),
            Transition::To(PlaybookStatus::InProgress)
        );
        assert_eq!(
            status.transition(Reject).unwrap(),
            Transition::To(PlaybookStatus::Rejected)
        );
        assert_eq!(status.transition(Delete).unwrap(), Transition::Delete);
        assert_eq!(status.transition(Edit).unwrap(), Transition::Stay);
        assert!(status.transition(MarkApplied).is_err());
    }

    #[test]
    fn test_in_progress_transitions() {
        let status = PlaybookStatus::InProgress;
        assert_eq!(
            status.transition(MarkApplied).unwrap(),
            Transition::To(PlaybookStatus::Applied)
        );
        assert_eq!(
            status.transition(StopUsing).unwrap(),
            Transition::To(PlaybookStatus::NotUsed)
        );
        assert!(status.transition(Delete).unwrap_err().is_invalid_transition());
    }

    #[test]
    fn test_rejected_regenerate_keeps_status() {
        let status = PlaybookStatus::Rejected;
        assert_eq!(status.transition(Regenerate).unwrap(), Transition::Stay);
        assert_eq!(status.transition(Delete).unwrap(), Transition::Delete);
        assert!(status.transition(Accept).is_err());
    }

    #[test]
    fn test_applied_is_terminal() {
        let status = PlaybookStatus::Applied;
        assert!(status.is_terminal());
        for action in PlaybookAction::iter() {
            match status.transition(action) {
                Ok(transition) => assert_eq!(transition, Transition::Stay, "{action}"),
                Err(err) => assert!(err.is_invalid_transition()),
            }
        }
    }

    /// Walks every reachable status from `start` through accepted actions.
    fn reachable(start: PlaybookStatus) -> HashSet<PlaybookStatus> {
        let mut seen = HashSet::from([start]);
        let mut frontier = vec![start];
        while let Some(status) = frontier.pop() {
            for action in status.available_actions() {
                if let Ok(Transition::To(next)) = status.transition(*action) {
                    if seen.insert(next) {
                        frontier.push(next);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn test_no_path_from_applied_back_to_not_used() {
        let from_applied = reachable(PlaybookStatus::Applied);
        assert_eq!(from_applied, HashSet::from([PlaybookStatus::Applied]));

        let from_rejected = reachable(PlaybookStatus::Rejected);
        assert_eq!(from_rejected, HashSet::from([PlaybookStatus::Rejected]));

        let from_not_used = reachable(PlaybookStatus::NotUsed);
        assert_eq!(from_not_used.len(), 4);
    }

    #[test]
    fn test_error_names_the_action() {
        let err = PlaybookStatus::Applied.transition(StopUsing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot stop using playbook in status 'Applied'"
        );
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(PlaybookAction::from_str("mark-applied").unwrap(), MarkApplied);
        assert_eq!(PlaybookAction::from_str("Stop-Using").unwrap(), StopUsing);
        assert!(PlaybookAction::from_str("launch").is_err());
        assert_eq!(
            PlaybookStatus::from_str("not used").unwrap(),
            PlaybookStatus::NotUsed
        );
    }
}
