//! Dashboard Read Client
//!
//! GET-only access to the four dashboard endpoints.

use serde::{Deserialize, Serialize};

use super::feed::{FeedKind, FeedUpdate};
use crate::config::{DashboardConfig, Endpoints};
use crate::domain::{ClauseCompliance, ContractSummary, CycleTimeRecord, DomainResult, TaskPage};
use crate::http::ApiClient;

/// Filters for the active-task endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub limit: u32,
}

impl TaskQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self { status: None, priority: None, limit }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_limit(config.task_limit)
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        if let Some(priority) = self.priority.as_deref().filter(|p| !p.is_empty()) {
            params.push(("priority", priority.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self::with_limit(20)
    }
}

/// Narrow compliance results to one contract, or one clause of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFilter {
    pub contract_id: Option<String>,
    pub clause_id: Option<String>,
}

impl ComplianceFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contract(contract_id: impl Into<String>) -> Self {
        Self { contract_id: Some(contract_id.into()), clause_id: None }
    }

    pub fn clause(contract_id: impl Into<String>, clause_id: impl Into<String>) -> Self {
        Self {
            contract_id: Some(contract_id.into()),
            clause_id: Some(clause_id.into()),
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(contract_id) = &self.contract_id {
            params.push(("contract_id", contract_id.clone()));
        }
        if let Some(clause_id) = &self.clause_id {
            params.push(("clause_id", clause_id.clone()));
        }
        params
    }
}

#[derive(Deserialize)]
struct CycleTimeEnvelope {
    #[serde(default)]
    cycle_time_data: Option<Vec<CycleTimeRecord>>,
}

#[derive(Debug, Clone)]
pub struct DashboardClient {
    api: ApiClient,
    endpoints: Endpoints,
}

impl DashboardClient {
    pub fn new(api: ApiClient, endpoints: Endpoints) -> Self {
        Self { api, endpoints }
    }

    pub fn from_config(config: &DashboardConfig) -> DomainResult<Self> {
        Ok(Self::new(ApiClient::from_config(config)?, config.endpoints.clone()))
    }

    pub async fn contract_summary(&self) -> DomainResult<ContractSummary> {
        self.api.get_json(&self.endpoints.contract_summary, &[]).await
    }

    /// Records come wrapped in `{"cycle_time_data": [...]}`; a missing or
    /// null list is empty.
    pub async fn cycle_time(&self) -> DomainResult<Vec<CycleTimeRecord>> {
        let envelope: CycleTimeEnvelope = self.api.get_json(&self.endpoints.cycle_time, &[]).await?;
        Ok(envelope.cycle_time_data.unwrap_or_default())
    }

    pub async fn active_tasks(&self, query: &TaskQuery) -> DomainResult<TaskPage> {
        self.api.get_json(&self.endpoints.active_tasks, &query.to_params()).await
    }

    pub async fn compliance(&self, filter: &ComplianceFilter) -> DomainResult<Vec<ClauseCompliance>> {
        self.api.get_json(&self.endpoints.compliance, &filter.to_params()).await
    }

    /// Fetch one feed; compliance is always unfiltered here.
    pub async fn fetch(&self, kind: FeedKind, query: &TaskQuery) -> FeedUpdate {
        match kind {
            FeedKind::ContractSummary => FeedUpdate::ContractSummary(self.contract_summary().await),
            FeedKind::CycleTime => FeedUpdate::CycleTime(self.cycle_time().await),
            FeedKind::ActiveTasks => FeedUpdate::ActiveTasks(self.active_tasks(query).await),
            FeedKind::Compliance => {
                FeedUpdate::Compliance(self.compliance(&ComplianceFilter::all()).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_query_params() {
        let query = TaskQuery {
            status: Some("pending".to_string()),
            priority: Some(String::new()),
            limit: 5,
        };
        assert_eq!(
            query.to_params(),
            vec![("status", "pending".to_string()), ("limit", "5".to_string())]
        );
        assert_eq!(TaskQuery::default().to_params(), vec![("limit", "20".to_string())]);
    }

    #[test]
    fn test_compliance_filter_params() {
        assert!(ComplianceFilter::all().to_params().is_empty());
        assert_eq!(
            ComplianceFilter::clause("Contract_2", "7").to_params(),
            vec![
                ("contract_id", "Contract_2".to_string()),
                ("clause_id", "7".to_string())
            ]
        );
    }
}
