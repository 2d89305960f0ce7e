//! Contract dashboard core
//!
//! Platform-neutral logic shared by the web client and native tests:
//! timeline coordinate mapping, milestone planning against a remote store,
//! and the dashboard's read feeds.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod http;
pub mod planner;
pub mod store;
pub mod timeline;

pub use config::{DashboardConfig, DashboardDefaults, Endpoints};
pub use dashboard::{DashboardClient, DashboardState, Feed, FeedKind, FeedUpdate, TaskQuery};
pub use domain::{DomainError, DomainResult, Milestone, MilestoneId, ProjectWindow};
pub use http::ApiClient;
pub use planner::{EditSession, EditTarget, MilestoneDraft, MilestonePlanner};
pub use store::{HttpMilestoneStore, InMemoryMilestoneStore, MilestoneStore};
