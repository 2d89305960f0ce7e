//! Dashboard feeds against a mock server.

use chrono::Utc;
use dashboard_core::dashboard::{ComplianceFilter, DashboardClient, DashboardState, FeedKind, TaskQuery};
use dashboard_core::domain::ContractSummary;
use dashboard_core::{ApiClient, DashboardConfig, Endpoints};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DashboardClient {
    let api = ApiClient::new(server.uri()).expect("valid base url");
    DashboardClient::new(api, Endpoints::default())
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn contract_summary_maps_executed() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/new_contract_request/contracts/summary",
        json!({"intake": 3, "evaluation": 1, "performance": 2, "executed": 7, "total": 13}),
    )
    .await;

    let summary = client_for(&server).contract_summary().await.unwrap();
    assert_eq!(
        summary,
        ContractSummary { intake: 3, evaluation: 1, performance: 2, closeout: 7 }
    );
}

#[tokio::test]
async fn cycle_time_unwraps_envelope() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/new_contract_request/api/dashboard/metrics/cycle-time",
        json!({"cycle_time_data": [
            {"month": "Sep", "intake": 10, "evaluation": 9, "performance": 4, "closeout": 2}
        ]}),
    )
    .await;

    let records = client_for(&server).cycle_time().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].month, "Sep");
    assert_eq!(records[0].evaluation, 9);
}

#[tokio::test]
async fn cycle_time_missing_list_is_empty() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/new_contract_request/api/dashboard/metrics/cycle-time",
        json!({"cycle_time_data": null}),
    )
    .await;

    assert!(client_for(&server).cycle_time().await.unwrap().is_empty());
}

#[tokio::test]
async fn active_tasks_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/api/dashboard/tasks/active"))
        .and(query_param("status", "pending"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [{
                "id": 11,
                "title": "Review indemnity clause",
                "status": "pending",
                "priority": "high",
                "due_date": "2024-06-05T17:00:00",
                "assigned_to": "Legal Team",
                "contract_id": "Contract_2"
            }],
            "summary": {"total_tasks": 1, "pending_tasks": 1, "high_priority_tasks": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = TaskQuery {
        status: Some("pending".to_string()),
        ..TaskQuery::default()
    };
    let page = client_for(&server).active_tasks(&query).await.unwrap();
    assert_eq!(page.tasks[0].title, "Review indemnity clause");
    assert_eq!(page.tasks[0].assigned_by, None);
    assert_eq!(page.summary.total_tasks, 1);
    assert_eq!(page.summary.completed_tasks, 0);
}

#[tokio::test]
async fn compliance_sends_contract_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/api/contract/compliance"))
        .and(query_param("contract_id", "Contract_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "contract_id": "Contract_2",
            "clause_id": "2",
            "title": "Termination",
            "compliance_summary": "Compliant",
            "compliance_confidence": 0,
            "closeout_status": "Review Required",
            "risk_assessment": "High"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let clauses = client_for(&server)
        .compliance(&ComplianceFilter::contract("Contract_2"))
        .await
        .unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0].title, "Termination");
}

#[tokio::test]
async fn refresh_degrades_each_feed_independently() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/new_contract_request/contracts/summary",
        json!({"intake": 1, "evaluation": 1, "performance": 1, "executed": 1}),
    )
    .await;
    mount_json(
        &server,
        "/api/new_contract_request/api/dashboard/metrics/cycle-time",
        json!({"cycle_time_data": []}),
    )
    .await;
    mount_json(&server, "/api/dashboard/api/contract/compliance", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/api/dashboard/tasks/active"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = DashboardConfig::default().with_base_url(server.uri());
    let client = DashboardClient::from_config(&config).unwrap();
    let mut state = DashboardState::from_config(&config);
    let fallback_tasks = state.tasks.data().clone();

    state.refresh(&client, &TaskQuery::from_config(&config), Utc::now()).await;

    assert_eq!(state.contract_summary.data().total(), 4);
    assert!(state.cycle_time.data().is_empty());
    assert_eq!(state.tasks.data(), &fallback_tasks);
    assert_eq!(state.tasks.error(), Some("Failed to load tasks"));
    assert_eq!(state.failed(), vec![FeedKind::ActiveTasks]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn single_feed_fetch_lands_in_its_own_feed() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/dashboard/api/contract/compliance", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/api/dashboard/tasks/active"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = DashboardConfig::default().with_base_url(server.uri());
    let client = DashboardClient::from_config(&config).unwrap();
    let query = TaskQuery::from_config(&config);
    let mut state = DashboardState::from_config(&config);

    state.begin_refresh(FeedKind::Compliance);
    let update = client.fetch(FeedKind::Compliance, &query).await;
    assert_eq!(update.kind(), FeedKind::Compliance);
    assert!(update.is_ok());
    state.apply(update, Utc::now());
    assert!(state.compliance.data().is_empty());

    state.begin_refresh(FeedKind::ActiveTasks);
    let update = client.fetch(FeedKind::ActiveTasks, &query).await;
    assert!(!update.is_ok());
    state.apply(update, Utc::now());
    assert_eq!(state.failed(), vec![FeedKind::ActiveTasks]);
    assert!(!state.is_feed_loading(FeedKind::ActiveTasks));
    assert_eq!(state.cycle_time.data().len(), 3);
}
