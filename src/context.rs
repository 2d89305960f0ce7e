//! Application Context
//!
//! Shared state provided via Leptos Context API.

use dashboard_core::{DashboardConfig, DomainResult, HttpMilestoneStore};
use leptos::prelude::*;

use crate::commands::SharedPlanner;
use crate::models::ActiveView;

/// Build-time override for the API origin
const API_BASE_URL: Option<&str> = option_env!("DASHBOARD_API_BASE_URL");

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable for the life of the page
    config: StoredValue<DashboardConfig>,
    /// Owns the committed milestone list; the store mirrors it
    planner: StoredValue<DomainResult<SharedPlanner>, LocalStorage>,
    /// Page shown in the main column - read
    pub active_view: ReadSignal<ActiveView>,
    /// Page shown in the main column - write
    set_active_view: WriteSignal<ActiveView>,
    /// Bumped to reload milestones from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to reload milestones from the store - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        config: DashboardConfig,
        active_view: (ReadSignal<ActiveView>, WriteSignal<ActiveView>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            planner: StoredValue::new_local(
                HttpMilestoneStore::from_config(&config).map(crate::commands::shared_planner),
            ),
            config: StoredValue::new(config),
            active_view: active_view.0,
            set_active_view: active_view.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn planner(&self) -> DomainResult<SharedPlanner> {
        self.planner.get_value()
    }

    pub fn show(&self, view: ActiveView) {
        self.set_active_view.set(view);
    }

    /// Trigger a reload of milestones
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Defaults, with the API origin taken from the build environment when set
pub fn load_config() -> DashboardConfig {
    let config = DashboardConfig::default();
    match API_BASE_URL {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url),
        _ => config,
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
