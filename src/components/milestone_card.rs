//! Milestone Card Component
//!
//! One row of the milestone list: summary line, expandable details,
//! edit and delete. Delete goes straight to the store; there is no undo.

use dashboard_core::timeline::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{status_class, Milestone};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MilestoneCard(milestone: Milestone, on_edit: Callback<Milestone>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = milestone.id;
    let expanded = move || store.expanded_milestone().get() == Some(id);
    let busy = move || store.edit_session().with(|s| s.is_submitting());

    let toggle = move |_: web_sys::MouseEvent| {
        store
            .expanded_milestone()
            .update(|current| *current = if *current == Some(id) { None } else { Some(id) });
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let planner = ctx.planner();
        spawn_local(async move {
            if let Err(e) = commands::delete_milestone(store, planner, id).await {
                log::error!("Error deleting milestone {}: {}", id, e);
            }
        });
    };

    let dates = format!(
        "{} - {} ({} days)",
        format_date(milestone.start_date),
        format_date(milestone.end_date),
        milestone.duration_days()
    );
    let description = milestone.description.clone();
    let assignees = milestone.assignees.clone();
    let for_edit = milestone.clone();

    view! {
        <div class=move || if expanded() { "milestone-card expanded" } else { "milestone-card" }>
            <div class="milestone-row" on:click=toggle>
                <span class="milestone-type">{milestone.milestone_type.as_str()}</span>
                <span class="milestone-title">{milestone.title.clone()}</span>
                {milestone.has_warning().then(|| view! { <span class="warning-icon" title="Needs attention">"⚠"</span> })}
                <span class="milestone-dates">{dates}</span>
                <span class=status_class(milestone.status)>{milestone.status.as_str()}</span>
                <button
                    class="edit-btn"
                    disabled=busy
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(for_edit.clone());
                    }
                >
                    "Edit"
                </button>
                <button class="delete-btn" title="Delete" disabled=busy on:click=on_delete>
                    "🗑"
                </button>
            </div>
            {move || expanded().then(|| {
                let people = if assignees.is_empty() {
                    view! { <p class="no-assignees">"No assignees"</p> }.into_any()
                } else {
                    view! {
                        <ul class="assignee-list">
                            {assignees.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                };
                view! {
                    <div class="milestone-details">
                        <p class="milestone-description">{description.clone()}</p>
                        {people}
                    </div>
                }
            })}
        </div>
    }
}
