//! Dashboard View Component
//!
//! Summary tiles, cycle time, compliance and tasks. Feeds refresh on mount
//! and then on the configured interval until the view is unmounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ComplianceOverview, ContractTiles, CycleTimeTable, TaskTable};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// How often the refresh loop checks for due feeds
const TICK_MS: u32 = 1_000;

#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = alive.clone();
        let config = ctx.config();
        spawn_local(async move {
            log::info!("Dashboard refresh every {}s", config.refresh_interval_secs);
            while alive.load(Ordering::Relaxed) {
                commands::refresh_due_feeds(store, &config);
                TimeoutFuture::new(TICK_MS).await;
            }
            log::debug!("Dashboard refresh loop stopped");
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let refreshing = move || store.dashboard().with(|d| d.is_loading());

    view! {
        <div class="dashboard-view">
            <div class="section-header">
                <h2>"Contract Overview"</h2>
                <button
                    class="refresh-btn"
                    disabled=refreshing
                    on:click=move |_| commands::refresh_dashboard(store, &ctx.config())
                >
                    {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="dashboard-grid">
                <ContractTiles />
                <ComplianceOverview />
                <CycleTimeTable />
                <TaskTable />
            </div>
        </div>
    }
}
