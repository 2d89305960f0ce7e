//! Contract Tiles Component
//!
//! Lifecycle stage counts and the cycle-time table.

use dashboard_core::FeedKind;
use leptos::prelude::*;

use crate::components::FeedStatus;
use crate::store::{use_app_store, AppStateStoreFields};

const STAGES: [(&str, &str); 4] = [
    ("intake", "Intake"),
    ("evaluation", "Evaluation"),
    ("performance", "Performance"),
    ("closeout", "Closeout"),
];

#[component]
pub fn ContractTiles() -> impl IntoView {
    let store = use_app_store();
    let summary = move || store.dashboard().with(|d| *d.contract_summary.data());

    view! {
        <section class="dashboard-section contract-tiles">
            <h3>"Contracts by Stage"</h3>
            <FeedStatus kind=FeedKind::ContractSummary />
            <div class="tile-row">
                {STAGES.into_iter().map(|(key, label)| {
                    let count = move || {
                        let s = summary();
                        match key {
                            "intake" => s.intake,
                            "evaluation" => s.evaluation,
                            "performance" => s.performance,
                            _ => s.closeout,
                        }
                    };
                    view! {
                        <div class=format!("tile tile-{}", key)>
                            <span class="tile-count">{count}</span>
                            <span class="tile-label">{label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
            <p class="tile-total">{move || format!("{} contracts in total", summary().total())}</p>
        </section>
    }
}

#[component]
pub fn CycleTimeTable() -> impl IntoView {
    let store = use_app_store();
    let records = move || store.dashboard().with(|d| d.cycle_time.data().clone());

    view! {
        <section class="dashboard-section cycle-time">
            <h3>"Cycle Time"</h3>
            <FeedStatus kind=FeedKind::CycleTime />
            {move || {
                let rows = records();
                if rows.is_empty() {
                    view! { <p class="empty-state">"No cycle time data"</p> }.into_any()
                } else {
                    view! {
                        <table class="cycle-time-table">
                            <thead>
                                <tr>
                                    <th>"Month"</th>
                                    {STAGES.into_iter().map(|(_, label)| view! { <th>{label}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|r| view! {
                                    <tr>
                                        <td>{r.month}</td>
                                        <td>{r.intake}</td>
                                        <td>{r.evaluation}</td>
                                        <td>{r.performance}</td>
                                        <td>{r.closeout}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </section>
    }
}
