//! Planner View Component
//!
//! Solicitation timeline, milestone list and the add/edit form.

use dashboard_core::planner::EditSession;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{MilestoneCard, MilestoneForm, MilestoneTimeline};
use crate::context::use_app_context;
use crate::models::Milestone;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PlannerView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let window = ctx.config().project_window;

    // Load milestones on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("Loading milestones, trigger={}", trigger);
        spawn_local(commands::load_milestones(store, ctx.planner()));
    });

    let form_open = move || store.edit_session().with(|s| !s.is_idle());
    let on_edit = Callback::new(move |milestone: Milestone| {
        store.edit_session().set(EditSession::edit(&milestone));
    });

    view! {
        <div class="planner-view">
            <div class="section-header">
                <h2>"Solicitation Timeline"</h2>
                <span class="window-range">
                    {format!("{} to {}", window.start_date(), window.end_date())}
                </span>
                <button
                    class="add-btn"
                    disabled=form_open
                    on:click=move |_| store.edit_session().set(EditSession::new_milestone())
                >
                    "+ Add Milestone"
                </button>
            </div>

            {move || store.milestones_error().get().map(|e| view! {
                <div class="feed-error" role="alert">
                    <span class="feed-error-text">{e}</span>
                    <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            <MilestoneTimeline window=window />

            <Show when=form_open>
                <MilestoneForm />
            </Show>

            <Show
                when=move || !store.milestones_loading().get() || !store.milestones().with(|m| m.is_empty())
                fallback=|| view! { <p class="loading">"Loading milestones..."</p> }
            >
                <div class="milestone-list">
                    <For
                        each=move || store.milestones().get()
                        key=|m| m.clone()
                        children=move |m| view! { <MilestoneCard milestone=m on_edit=on_edit /> }
                    />
                </div>
                <p class="item-count">{move || format!("{} milestones", store.milestones().with(|m| m.len()))}</p>
            </Show>
        </div>
    }
}
