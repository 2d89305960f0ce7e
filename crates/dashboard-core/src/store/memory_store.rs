//! In-Memory Milestone Store
//!
//! Stands in for the remote service in tests and offline demos. Ids are
//! assigned as `max + 1`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::MilestoneStore;
use crate::domain::{DomainError, DomainResult, Milestone, MilestoneId, NewMilestone};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMilestoneStore {
    milestones: Arc<Mutex<Vec<Milestone>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryMilestoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_milestones(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones: Arc::new(Mutex::new(milestones)),
            offline: Arc::default(),
        }
    }

    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Current contents, bypassing the offline switch
    pub async fn snapshot(&self) -> Vec<Milestone> {
        self.milestones.lock().await.clone()
    }

    fn check_online(&self) -> DomainResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::Transport("milestone store is unreachable".to_string()));
        }
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MilestoneStore for InMemoryMilestoneStore {
    async fn list(&self) -> DomainResult<Vec<Milestone>> {
        self.check_online()?;
        Ok(self.milestones.lock().await.clone())
    }

    async fn create(&self, milestone: &NewMilestone) -> DomainResult<Milestone> {
        self.check_online()?;
        let mut guard = self.milestones.lock().await;
        let next_id = guard.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let created = milestone.clone().with_id(next_id);
        guard.push(created.clone());
        Ok(created)
    }

    async fn update(&self, milestone: &Milestone) -> DomainResult<Milestone> {
        self.check_online()?;
        let mut guard = self.milestones.lock().await;
        let slot = guard
            .iter_mut()
            .find(|m| m.id == milestone.id)
            .ok_or_else(|| DomainError::NotFound(format!("milestone {}", milestone.id)))?;
        *slot = milestone.clone();
        Ok(milestone.clone())
    }

    async fn delete(&self, id: MilestoneId) -> DomainResult<()> {
        self.check_online()?;
        let mut guard = self.milestones.lock().await;
        let before = guard.len();
        guard.retain(|m| m.id != id);
        if guard.len() == before {
            return Err(DomainError::NotFound(format!("milestone {}", id)));
        }
        Ok(())
    }
}
