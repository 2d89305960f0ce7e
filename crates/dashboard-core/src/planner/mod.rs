//! Milestone Planner
//!
//! Keeps a local milestone list in step with a [`MilestoneStore`]. Every
//! mutation awaits the store first and only then touches the local list,
//! so a failed round-trip never leaves a phantom entry behind.
//!
//! There is no version token: two overlapping edits of one milestone are
//! not serialized and the last write wins.

mod draft;
mod reconcile;
mod session;

#[cfg(test)]
mod tests;

pub use draft::{parse_form_date, MilestoneDraft};
pub use reconcile::{append, position_of, remove_by_id, replace_by_id};
pub use session::{EditSession, EditTarget};

use crate::domain::{DomainError, DomainResult, Milestone, MilestoneId, ProjectWindow};
use crate::store::MilestoneStore;
use crate::timeline::{layout_milestones, TimelineBar};

pub struct MilestonePlanner<S: MilestoneStore> {
    store: S,
    milestones: Vec<Milestone>,
    session: EditSession,
    loading: bool,
    last_error: Option<DomainError>,
}

impl<S: MilestoneStore> MilestonePlanner<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            milestones: Vec::new(),
            session: EditSession::Idle,
            loading: false,
            last_error: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn get(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Most recent store failure, cleared by the next successful call
    pub fn last_error(&self) -> Option<&DomainError> {
        self.last_error.as_ref()
    }

    fn record<T>(&mut self, result: &DomainResult<T>) {
        match result {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.clone()),
        }
    }

    /// Replace the local list with the store's. Failures are logged and
    /// kept in [`last_error`](Self::last_error); the list is left as it was.
    pub async fn load(&mut self) {
        self.loading = true;
        let result = self.store.list().await;
        self.loading = false;
        self.record(&result);
        match result {
            Ok(milestones) => {
                log::info!("Loaded {} milestones", milestones.len());
                self.milestones = milestones;
            }
            Err(e) => log::error!("Error fetching milestones: {}", e),
        }
    }

    /// Validate, send with status `pending`, then append the stored record.
    pub async fn create(&mut self, draft: &MilestoneDraft) -> DomainResult<Milestone> {
        let payload = draft.to_new_milestone()?;
        let result = self.store.create(&payload).await;
        self.record(&result);
        match result {
            Ok(saved) => {
                log::info!("Created milestone {} ({})", saved.id, saved.title);
                append(&mut self.milestones, saved.clone());
                Ok(saved)
            }
            Err(e) => {
                log::error!("Error adding milestone: {}", e);
                Err(e)
            }
        }
    }

    /// Send a full replacement for `id`, then swap it into the list.
    pub async fn update(
        &mut self,
        id: MilestoneId,
        draft: &MilestoneDraft,
    ) -> DomainResult<Milestone> {
        if position_of(&self.milestones, id).is_none() {
            return Err(DomainError::NotFound(format!("milestone {}", id)));
        }
        let replacement = draft.to_milestone(id)?;
        let result = self.store.update(&replacement).await;
        self.record(&result);
        match result {
            Ok(saved) => {
                log::info!("Updated milestone {}", id);
                // The list may have been reloaded while the request was in flight.
                if let Err(e) = replace_by_id(&mut self.milestones, saved.clone()) {
                    log::warn!("Updated milestone {} is no longer listed: {}", id, e);
                    return Err(e);
                }
                Ok(saved)
            }
            Err(e) => {
                log::error!("Error updating milestone {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Delete by id, then drop it from the list. No confirmation, no undo.
    pub async fn delete(&mut self, id: MilestoneId) -> DomainResult<()> {
        if position_of(&self.milestones, id).is_none() {
            return Err(DomainError::NotFound(format!("milestone {}", id)));
        }
        let result = self.store.delete(id).await;
        self.record(&result);
        match result {
            Ok(()) => {
                log::info!("Deleted milestone {}", id);
                remove_by_id(&mut self.milestones, id)?;
                Ok(())
            }
            Err(e) => {
                log::error!("Error deleting milestone {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Open a blank form
    pub fn begin_new(&mut self) {
        self.session = EditSession::new_milestone();
    }

    /// Open the form prefilled from milestone `id`
    pub fn begin_edit(&mut self, id: MilestoneId) -> DomainResult<()> {
        let milestone = self
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("milestone {}", id)))?;
        self.session = EditSession::edit(milestone);
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Option<&mut MilestoneDraft> {
        self.session.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Take over a form session that was edited elsewhere, such as in the
    /// UI's own state, so it can be submitted here.
    pub fn restore_session(&mut self, session: EditSession) {
        self.session = session;
    }

    /// Submit the open form as a create or an update.
    ///
    /// Invalid drafts stay in `Editing` with the message attached and no
    /// store call is made. Store failures return the session to `Editing`.
    pub async fn submit(&mut self) -> DomainResult<Milestone> {
        let Some(draft) = self.session.draft() else {
            return Err(DomainError::Conflict("no milestone form is open".to_string()));
        };
        if let Err(e) = draft.validate() {
            self.session.reject(e.to_string());
            return Err(e);
        }

        let (target, draft) = self.session.begin_submit()?;
        let result = match target {
            EditTarget::New => self.create(&draft).await,
            EditTarget::Existing(id) => self.update(id, &draft).await,
        };
        match &result {
            Ok(_) => self.session.complete(),
            Err(e) => self.session.fail(e.to_string()),
        }
        result
    }

    /// Bars for the current list
    pub fn timeline(&self, window: &ProjectWindow) -> DomainResult<Vec<TimelineBar>> {
        layout_milestones(&self.milestones, window)
    }
}
