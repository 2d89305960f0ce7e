//! Frontend Models
//!
//! Records come straight from the core crate; only view-level types live here.

pub use dashboard_core::domain::{Milestone, MilestoneId, MilestoneStatus, MilestoneType};

/// Top-level page shown in the main column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Planner,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Dashboard, ActiveView::Planner];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Planner => "Solicitation Planner",
        }
    }
}

/// CSS class for a milestone's status badge
pub fn status_class(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Completed => "status-badge completed",
        MilestoneStatus::InProgress => "status-badge in-progress",
        MilestoneStatus::Pending => "status-badge pending",
        MilestoneStatus::Overdue => "status-badge overdue",
    }
}

/// CSS class for a milestone's timeline bar
pub fn bar_class(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Completed => "timeline-bar completed",
        MilestoneStatus::InProgress => "timeline-bar in-progress",
        MilestoneStatus::Pending => "timeline-bar pending",
        MilestoneStatus::Overdue => "timeline-bar overdue",
    }
}
