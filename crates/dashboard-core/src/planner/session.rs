//! Edit Session
//!
//! `Idle -> Editing -> Submitting -> Idle` on success, or back to
//! `Editing` with the error kept on failure so the user keeps their input.

use crate::domain::{DomainError, DomainResult, Milestone, MilestoneId};
use super::draft::MilestoneDraft;

/// What a submit will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(MilestoneId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        target: EditTarget,
        draft: MilestoneDraft,
        error: Option<String>,
    },
    Submitting {
        target: EditTarget,
        draft: MilestoneDraft,
    },
}

impl EditSession {
    /// Blank form for a new milestone
    pub fn new_milestone() -> Self {
        EditSession::Editing {
            target: EditTarget::New,
            draft: MilestoneDraft::new(),
            error: None,
        }
    }

    /// Form prefilled from an existing milestone
    pub fn edit(milestone: &Milestone) -> Self {
        EditSession::Editing {
            target: EditTarget::Existing(milestone.id),
            draft: MilestoneDraft::from_milestone(milestone),
            error: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditSession::Submitting { .. })
    }

    pub fn target(&self) -> Option<EditTarget> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target, .. } | EditSession::Submitting { target, .. } => {
                Some(*target)
            }
        }
    }

    pub fn draft(&self) -> Option<&MilestoneDraft> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } | EditSession::Submitting { draft, .. } => {
                Some(draft)
            }
        }
    }

    /// Only an `Editing` session hands out its draft for mutation.
    pub fn draft_mut(&mut self) -> Option<&mut MilestoneDraft> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EditSession::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Record a blocking problem without leaving `Editing`
    pub fn reject(&mut self, message: impl Into<String>) {
        if let EditSession::Editing { error, .. } = self {
            *error = Some(message.into());
        }
    }

    /// `Editing -> Submitting`; hands back what to send
    pub fn begin_submit(&mut self) -> DomainResult<(EditTarget, MilestoneDraft)> {
        match std::mem::take(self) {
            EditSession::Editing { target, draft, .. } => {
                *self = EditSession::Submitting {
                    target,
                    draft: draft.clone(),
                };
                Ok((target, draft))
            }
            other => {
                *self = other;
                Err(DomainError::Conflict("no milestone form is open for submission".to_string()))
            }
        }
    }

    /// `Submitting -> Idle`
    pub fn complete(&mut self) {
        if self.is_submitting() {
            *self = EditSession::Idle;
        }
    }

    /// `Submitting -> Editing`, keeping the draft
    pub fn fail(&mut self, message: impl Into<String>) {
        if let EditSession::Submitting { target, draft } = std::mem::take(self) {
            *self = EditSession::Editing {
                target,
                draft,
                error: Some(message.into()),
            };
        }
    }

    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut session = EditSession::new_milestone();
        assert_eq!(session.target(), Some(EditTarget::New));
        session.draft_mut().unwrap().title = "RFI Release".to_string();

        let (target, draft) = session.begin_submit().unwrap();
        assert_eq!(target, EditTarget::New);
        assert_eq!(draft.title, "RFI Release");
        assert!(session.is_submitting());
        assert!(session.draft_mut().is_none());

        session.complete();
        assert!(session.is_idle());
    }

    #[test]
    fn test_cancel_from_any_state() {
        let mut session = EditSession::new_milestone();
        session.cancel();
        assert!(session.is_idle());

        session.cancel();
        assert!(session.is_idle());

        let mut session = EditSession::new_milestone();
        session.draft_mut().unwrap().title = "Legal Review".to_string();
        session.begin_submit().unwrap();
        assert!(session.is_submitting());
        session.cancel();
        assert!(session.is_idle());
        assert!(session.draft().is_none());

        // A late completion or failure leaves the cancelled form closed.
        session.complete();
        session.fail("HTTP 500");
        assert!(session.is_idle());
    }

    #[test]
    fn test_failure_returns_to_editing_with_draft() {
        let mut session = EditSession::new_milestone();
        session.draft_mut().unwrap().title = "RFP Release".to_string();
        session.begin_submit().unwrap();

        session.fail("HTTP 500");
        assert_eq!(session.error(), Some("HTTP 500"));
        assert_eq!(session.draft().unwrap().title, "RFP Release");
        assert!(session.draft_mut().is_some());
    }

    #[test]
    fn test_submit_requires_open_form() {
        let mut session = EditSession::Idle;
        assert!(matches!(session.begin_submit(), Err(DomainError::Conflict(_))));
        assert!(session.is_idle());

        session.fail("ignored");
        assert!(session.is_idle());
    }

    #[test]
    fn test_reject_keeps_editing() {
        let mut session = EditSession::new_milestone();
        session.reject("missing title");
        assert_eq!(session.error(), Some("missing title"));
        assert!(!session.is_submitting());
        session.cancel();
        assert!(session.is_idle());
    }
}
