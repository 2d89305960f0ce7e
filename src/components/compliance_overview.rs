//! Compliance Overview Component

use dashboard_core::dashboard::{
    compliance_percentage, count_critical_issues, summary_by_risk, summary_by_status,
    unique_contracts,
};
use dashboard_core::FeedKind;
use leptos::prelude::*;

use crate::components::FeedStatus;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ComplianceOverview() -> impl IntoView {
    let store = use_app_store();
    let clauses = Memo::new(move |_| store.dashboard().with(|d| d.compliance.data().clone()));

    let percentage = move || clauses.with(|c| compliance_percentage(c));
    let critical = move || clauses.with(|c| count_critical_issues(c));
    let contracts = move || clauses.with(|c| unique_contracts(c).len());
    let risk = move || clauses.with(|c| summary_by_risk(c));
    let status = move || clauses.with(|c| summary_by_status(c));

    view! {
        <section class="dashboard-section compliance-overview">
            <h3>"Compliance"</h3>
            <FeedStatus kind=FeedKind::Compliance />
            <div class="compliance-ring" style=move || format!("--pct: {}", percentage())>
                <span class="ring-value">{move || format!("{}%", percentage())}</span>
                <span class="ring-label">"compliant"</span>
            </div>
            <dl class="compliance-stats">
                <dt>"Critical issues"</dt>
                <dd class="critical">{critical}</dd>
                <dt>"Contracts reviewed"</dt>
                <dd>{contracts}</dd>
                <dt>"Clauses"</dt>
                <dd>{move || clauses.with(|c| c.len())}</dd>
            </dl>
            <div class="compliance-breakdown">
                <span class="risk-high">{move || format!("High risk: {}", risk().high)}</span>
                <span class="risk-medium">{move || format!("Medium: {}", risk().medium)}</span>
                <span class="risk-low">{move || format!("Low: {}", risk().low)}</span>
            </div>
            <div class="compliance-breakdown">
                <span>{move || format!("Compliant: {}", status().compliant)}</span>
                <span>{move || format!("Review required: {}", status().review_required)}</span>
                <span>{move || format!("Non-compliant: {}", status().non_compliant)}</span>
            </div>
        </section>
    }
}
