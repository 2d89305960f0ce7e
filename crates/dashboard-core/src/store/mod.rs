//! Milestone Store
//!
//! Abstract interface to wherever milestones live, plus the REST and
//! in-memory implementations.

mod traits;
mod http_store;
mod memory_store;

pub use traits::MilestoneStore;
pub use http_store::HttpMilestoneStore;
pub use memory_store::InMemoryMilestoneStore;
