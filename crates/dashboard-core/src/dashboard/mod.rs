//! Dashboard Feeds
//!
//! Read-only summary data: the REST client, stale-tolerant feed state,
//! and the aggregates the dashboard view renders.

mod client;
mod compliance;
mod feed;
mod tasks;

pub use client::{ComplianceFilter, DashboardClient, TaskQuery};
pub use compliance::{
    clauses_by_contract, compliance_percentage, count_critical_issues, summary_by_risk,
    summary_by_status, unique_contracts, RiskSummary, StatusSummary,
};
pub use feed::{DashboardState, Feed, FeedKind, FeedUpdate};
pub use tasks::{display_due_date, paginate, parse_due_date, task_due_status, DueStatus, Page};
