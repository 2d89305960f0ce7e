//! UI Components
//!
//! Reusable Leptos components.

mod compliance_overview;
mod contract_tiles;
mod dashboard_view;
mod feed_status;
mod milestone_card;
mod milestone_form;
mod milestone_timeline;
mod planner_view;
mod task_table;
mod view_tab_bar;

pub use compliance_overview::ComplianceOverview;
pub use contract_tiles::{ContractTiles, CycleTimeTable};
pub use dashboard_view::DashboardView;
pub use feed_status::FeedStatus;
pub use milestone_card::MilestoneCard;
pub use milestone_form::MilestoneForm;
pub use milestone_timeline::MilestoneTimeline;
pub use planner_view::PlannerView;
pub use task_table::TaskTable;
pub use view_tab_bar::ViewTabBar;
