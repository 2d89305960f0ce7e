//! View Tab Bar Component
//!
//! Switches the main column between the dashboard and the planner.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ActiveView;

#[component]
pub fn ViewTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="view-tab-bar">
            <span class="app-title">"Contract Dashboard"</span>
            {ActiveView::ALL.into_iter().map(|tab| {
                let is_active = move || ctx.active_view.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "view-tab active" } else { "view-tab" }
                        on:click=move |_| ctx.show(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
