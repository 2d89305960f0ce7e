//! REST Command Wrappers
//!
//! Frontend bindings to the dashboard API, organized by domain. Feed
//! clients are built from the app config on each call; milestone calls go
//! through the planner held in the app context.

mod dashboard;
mod milestone;

// Re-export all public items
pub use dashboard::*;
pub use milestone::*;
