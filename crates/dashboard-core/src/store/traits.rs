//! Milestone Store - Core Trait
//!
//! Futures are `Send` on native targets. In the browser the HTTP client
//! is single-threaded, so the trait drops that bound on `wasm32`.

use async_trait::async_trait;
use crate::domain::{DomainResult, Milestone, MilestoneId, NewMilestone};

/// CRUD over the remote milestone list
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MilestoneStore {
    /// Fetch every milestone
    async fn list(&self) -> DomainResult<Vec<Milestone>>;

    /// Persist a new milestone; the returned record carries the assigned id
    async fn create(&self, milestone: &NewMilestone) -> DomainResult<Milestone>;

    /// Replace an existing milestone wholesale
    async fn update(&self, milestone: &Milestone) -> DomainResult<Milestone>;

    /// Delete by id
    async fn delete(&self, id: MilestoneId) -> DomainResult<()>;
}
