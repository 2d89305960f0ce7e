//! Milestone Timeline Component
//!
//! Month axis, today marker and one clamped bar per milestone.

use dashboard_core::timeline::{format_percent, month_labels, timeline_position, today_position};
use dashboard_core::ProjectWindow;
use leptos::prelude::*;

use crate::models::bar_class;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MilestoneTimeline(window: ProjectWindow) -> impl IntoView {
    let store = use_app_store();

    let labels = match month_labels(&window) {
        Ok(labels) => labels,
        Err(e) => {
            log::error!("Cannot lay out timeline: {}", e);
            return view! { <div class="timeline-empty">"Project window has no length"</div> }
                .into_any();
        }
    };
    let today = today_position(&window).unwrap_or(0.0);

    view! {
        <div class="milestone-timeline">
            <div class="timeline-axis">
                {labels.into_iter().map(|label| view! {
                    <span class="month-label" style=format!("left: {}", format_percent(label.position))>
                        {label.name}
                    </span>
                }).collect_view()}
            </div>
            <div class="timeline-track">
                <div class="today-marker" style=format!("left: {}", format_percent(today))>
                    <span class="today-label">"Today"</span>
                </div>
                <For
                    each=move || store.milestones().get()
                    key=|m| m.clone()
                    children=move |m| {
                        let style = timeline_position(m.start_date, m.end_date, &window)
                            .map(|p| p.to_css())
                            .unwrap_or_default();
                        let warn = if m.has_warning() { " warning" } else { "" };
                        view! {
                            <div
                                class=format!("{}{}", bar_class(m.status), warn)
                                style=style
                                title=m.title.clone()
                                on:click=move |_| store.expanded_milestone().set(Some(m.id))
                            >
                                <span class="bar-label">{m.title.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
    .into_any()
}
