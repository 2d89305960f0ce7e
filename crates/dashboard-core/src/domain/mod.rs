//! Domain Layer
//!
//! Core entities and the error type shared by every other module.
//! Depends only on serde, chrono and thiserror.

mod entity;
mod milestone;
mod window;
mod dashboard;

pub use entity::{Entity, DomainError, DomainResult};
pub use milestone::{Milestone, MilestoneId, MilestoneStatus, MilestoneType, NewMilestone};
pub use window::ProjectWindow;
pub use dashboard::{
    ClauseCompliance, ContractSummary, CycleTimeRecord, Task, TaskPage, TaskSummary,
};
