//! Dashboard Configuration
//!
//! Everything the clients need is passed in explicitly through
//! [`DashboardConfig`]: base URL, endpoint paths, the project window,
//! refresh cadence, and the fallback data shown before the first fetch.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ContractSummary, CycleTimeRecord, DomainError, DomainResult, ProjectWindow, TaskPage,
    ClauseCompliance,
};

/// Endpoint paths, relative to `api_base_url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub milestones: String,
    pub contract_summary: String,
    pub cycle_time: String,
    pub active_tasks: String,
    pub compliance: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            milestones: "/api/milestones".to_string(),
            contract_summary: "/api/new_contract_request/contracts/summary".to_string(),
            cycle_time: "/api/new_contract_request/api/dashboard/metrics/cycle-time".to_string(),
            active_tasks: "/api/dashboard/api/dashboard/tasks/active".to_string(),
            compliance: "/api/dashboard/api/contract/compliance".to_string(),
        }
    }
}

/// Data displayed until a feed has loaded successfully
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardDefaults {
    pub contract_summary: ContractSummary,
    pub cycle_time: Vec<CycleTimeRecord>,
    pub tasks: TaskPage,
    pub compliance: Vec<ClauseCompliance>,
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        let record = |month: &str, intake, evaluation, performance, closeout| CycleTimeRecord {
            month: month.to_string(),
            intake,
            evaluation,
            performance,
            closeout,
        };
        Self {
            contract_summary: ContractSummary {
                intake: 12,
                evaluation: 5,
                performance: 8,
                closeout: 20,
            },
            cycle_time: vec![
                record("Jun", 35, 32, 28, 15),
                record("Jul", 18, 16, 12, 10),
                record("Aug", 25, 22, 18, 14),
            ],
            tasks: TaskPage::default(),
            compliance: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub endpoints: Endpoints,
    pub project_window: ProjectWindow,
    pub refresh_interval_secs: u64,
    /// `limit` sent to the active-task endpoint
    pub task_limit: u32,
    /// Rows per page in the task table
    pub task_page_size: usize,
    pub defaults: DashboardDefaults,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            endpoints: Endpoints::default(),
            project_window: default_project_window(),
            refresh_interval_secs: 30,
            task_limit: 20,
            task_page_size: 5,
            defaults: DashboardDefaults::default(),
        }
    }
}

fn default_project_window() -> ProjectWindow {
    let start = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_default();
    ProjectWindow::spanning(start, end)
}

impl DashboardConfig {
    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json_str(raw: &str) -> DomainResult<Self> {
        let config: DashboardConfig =
            serde_json::from_str(raw).map_err(|e| DomainError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL (trailing slashes removed)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(DomainError::Config("api_base_url is empty".to_string()));
        }
        if self.refresh_interval_secs == 0 {
            return Err(DomainError::Config("refresh_interval_secs must be positive".to_string()));
        }
        if self.task_limit == 0 {
            return Err(DomainError::Config("task_limit must be positive".to_string()));
        }
        if self.task_page_size == 0 {
            return Err(DomainError::Config("task_page_size must be positive".to_string()));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
