//! Task Table Component
//!
//! Active tasks, paged, with a due-date urgency badge.

use chrono::Local;
use dashboard_core::dashboard::{display_due_date, paginate, task_due_status};
use dashboard_core::FeedKind;
use leptos::prelude::*;

use crate::components::FeedStatus;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let per_page = ctx.config().task_page_size;
    let (page, set_page) = signal(1usize);

    let tasks = Memo::new(move |_| store.dashboard().with(|d| d.tasks.data().tasks.clone()));
    let summary = move || store.dashboard().with(|d| d.tasks.data().summary);
    let page_count = move || tasks.with(|t| paginate(t, 1, per_page).page_count);

    let rows = move || {
        let today = Local::now().date_naive();
        tasks.with(|t| {
            let current = paginate(t, page.get(), per_page);
            current
                .items
                .iter()
                .map(|task| {
                    let status = task_due_status(task, today);
                    let badge_class = status
                        .map(|s| format!("due-badge {}", s.as_str()))
                        .unwrap_or_else(|| "due-badge".to_string());
                    let badge_text = status.map(|s| s.as_str()).unwrap_or("-");
                    let due = display_due_date(&task.due_date).unwrap_or_else(|| task.due_date.clone());
                    view! {
                        <tr>
                            <td class="task-title">{task.title.clone()}</td>
                            <td>{task.assigned_to.clone()}</td>
                            <td>{task.priority.clone()}</td>
                            <td>{due}</td>
                            <td><span class=badge_class>{badge_text}</span></td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let range = move || {
        tasks.with(|t| {
            let current = paginate(t, page.get(), per_page);
            format!("{}-{} of {}", current.first, current.last, t.len())
        })
    };

    view! {
        <section class="dashboard-section task-table">
            <div class="section-header">
                <h3>"Tasks"</h3>
                <span class="task-summary">
                    {move || {
                        let s = summary();
                        format!("{} pending, {} in progress, {} high priority", s.pending_tasks, s.in_progress_tasks, s.high_priority_tasks)
                    }}
                </span>
            </div>
            <FeedStatus kind=FeedKind::ActiveTasks />
            <Show
                when=move || tasks.with(|t| !t.is_empty())
                fallback=|| view! { <p class="empty-state">"No active tasks"</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Task"</th>
                            <th>"Assigned to"</th>
                            <th>"Priority"</th>
                            <th>"Due"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <div class="pager">
                    <button
                        disabled=move || page.get() <= 1
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "‹"
                    </button>
                    <span>{range}</span>
                    <button
                        disabled=move || page.get() >= page_count()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "›"
                    </button>
                </div>
            </Show>
        </section>
    }
}
