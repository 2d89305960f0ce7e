//! Milestone Form Component
//!
//! Add/edit form bound to the store's edit session. Invalid input is
//! reported with a blocking alert and never sent; valid input is handed to
//! the planner, which decides between create and update.

use dashboard_core::planner::{parse_form_date, EditTarget, MilestoneDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::MilestoneType;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

fn edit_draft(store: AppStore, f: impl FnOnce(&mut MilestoneDraft)) {
    store.edit_session().update(|session| {
        if let Some(draft) = session.draft_mut() {
            f(draft);
        }
    });
}

fn read_draft<T: Default>(store: AppStore, f: impl FnOnce(&MilestoneDraft) -> T) -> T {
    store.edit_session().with(|session| session.draft().map(f).unwrap_or_default())
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn MilestoneForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let submitting = move || store.edit_session().with(|s| s.is_submitting());
    let heading = move || match store.edit_session().with(|s| s.target()) {
        Some(EditTarget::Existing(_)) => "Edit Milestone",
        _ => "Add Milestone",
    };
    let assignee_count = Memo::new(move |_| read_draft(store, |d| d.assignees.len()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = store.edit_session().with_untracked(|s| s.draft().cloned()) else {
            return;
        };
        if let Err(e) = draft.validate() {
            let message = e.to_string();
            blocking_alert(&message);
            store.edit_session().update(|s| s.reject(message));
            return;
        }

        let session = store.edit_session().get_untracked();
        if store.edit_session().write().begin_submit().is_err() {
            return;
        }
        let planner = ctx.planner();
        spawn_local(async move {
            if let Err(e) = commands::submit_milestone(store, planner, session).await {
                log::error!("Error saving milestone: {}", e);
            }
        });
    };

    view! {
        <form class="milestone-form" on:submit=on_submit>
            <h3>{heading}</h3>

            {move || store.edit_session().with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
                <div class="form-error" role="alert">{e}</div>
            })}

            <label>
                "Title"
                <input
                    type="text"
                    placeholder="Milestone title"
                    prop:value=move || read_draft(store, |d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(store, |d| d.title = value);
                    }
                />
            </label>

            <label>
                "Type"
                <select
                    prop:value=move || read_draft(store, |d| d.milestone_type.as_str().to_string())
                    on:change=move |ev| {
                        let value = MilestoneType::from_str(&event_target_value(&ev));
                        edit_draft(store, |d| d.milestone_type = value);
                    }
                >
                    {MilestoneType::ALL.into_iter().map(|ty| view! {
                        <option value=ty.as_str()>{ty.as_str()}</option>
                    }).collect_view()}
                </select>
            </label>

            <div class="date-row">
                <label>
                    "Start date"
                    <input
                        type="date"
                        prop:value=move || read_draft(store, |d| date_value(d.start_date))
                        on:input=move |ev| {
                            let value = parse_form_date(&event_target_value(&ev));
                            edit_draft(store, |d| d.start_date = value);
                        }
                    />
                </label>
                <label>
                    "End date"
                    <input
                        type="date"
                        prop:value=move || read_draft(store, |d| date_value(d.end_date))
                        on:input=move |ev| {
                            let value = parse_form_date(&event_target_value(&ev));
                            edit_draft(store, |d| d.end_date = value);
                        }
                    />
                </label>
            </div>

            <label>
                "Description"
                <textarea
                    rows="3"
                    prop:value=move || read_draft(store, |d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(store, |d| d.description = value);
                    }
                ></textarea>
            </label>

            <fieldset class="assignees">
                <legend>"Assignees"</legend>
                // Rows only re-render when one is added or removed, so typing keeps focus.
                {move || (0..assignee_count.get()).map(|i| view! {
                    <div class="assignee-row">
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || read_draft(store, |d| d.assignees.get(i).cloned().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_draft(store, |d| d.update_assignee(i, value));
                            }
                        />
                        <button
                            type="button"
                            class="remove-assignee-btn"
                            on:click=move |_| edit_draft(store, |d| d.remove_assignee(i))
                        >
                            "×"
                        </button>
                    </div>
                }).collect_view()}
                <button
                    type="button"
                    class="add-assignee-btn"
                    on:click=move |_| edit_draft(store, |d| d.add_assignee())
                >
                    "+ Add assignee"
                </button>
            </fieldset>

            <div class="form-actions">
                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Saving..." } else { "Save" }}
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    disabled=submitting
                    on:click=move |_| store.edit_session().update(|s| s.cancel())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
