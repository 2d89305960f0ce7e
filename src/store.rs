//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The milestone
//! fields mirror the planner held in the app context and are only written
//! by the milestone commands.

use dashboard_core::planner::EditSession;
use dashboard_core::{DashboardConfig, DashboardState};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Milestone, MilestoneId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Committed milestones, in store order
    pub milestones: Vec<Milestone>,
    /// Initial milestone fetch in flight
    pub milestones_loading: bool,
    /// Last milestone store failure, for the planner banner
    pub milestones_error: Option<String>,
    /// Form state for add/edit
    pub edit_session: EditSession,
    /// Milestone card showing its details
    pub expanded_milestone: Option<MilestoneId>,
    /// The four read-only feeds
    pub dashboard: DashboardState,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            milestones: Vec::new(),
            milestones_loading: false,
            milestones_error: None,
            edit_session: EditSession::Idle,
            expanded_milestone: None,
            dashboard: DashboardState::from_config(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
