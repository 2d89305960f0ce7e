//! Contract Dashboard Frontend App
//!
//! Tab bar over a single main column holding the active view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DashboardView, PlannerView, ViewTabBar};
use crate::context::{load_config, AppContext};
use crate::models::ActiveView;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("Contract dashboard using API at {}", config.api_base_url);

    let store = Store::new(AppState::new(&config));
    let active_view = signal(ActiveView::default());
    let reload_trigger = signal(0u32);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(config, active_view, reload_trigger);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <ViewTabBar />
            <main class="main-content">
                {move || match ctx.active_view.get() {
                    ActiveView::Dashboard => view! { <DashboardView /> }.into_any(),
                    ActiveView::Planner => view! { <PlannerView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
