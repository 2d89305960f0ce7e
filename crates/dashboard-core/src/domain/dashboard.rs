//! Dashboard Records
//!
//! Read-only records behind the summary tiles, cycle-time table, task
//! table and compliance overview. Missing numeric fields decode as 0.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Contract counts per lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ContractSummaryWire")]
pub struct ContractSummary {
    pub intake: u32,
    pub evaluation: u32,
    pub performance: u32,
    pub closeout: u32,
}

/// The summary endpoint reports closed-out contracts as `executed`.
#[derive(Deserialize)]
struct ContractSummaryWire {
    #[serde(default)]
    intake: Option<u32>,
    #[serde(default)]
    evaluation: Option<u32>,
    #[serde(default)]
    performance: Option<u32>,
    #[serde(default)]
    executed: Option<u32>,
    #[serde(default)]
    closeout: Option<u32>,
}

impl From<ContractSummaryWire> for ContractSummary {
    fn from(wire: ContractSummaryWire) -> Self {
        Self {
            intake: wire.intake.unwrap_or(0),
            evaluation: wire.evaluation.unwrap_or(0),
            performance: wire.performance.unwrap_or(0),
            closeout: wire.executed.or(wire.closeout).unwrap_or(0),
        }
    }
}

impl ContractSummary {
    pub fn total(&self) -> u32 {
        self.intake + self.evaluation + self.performance + self.closeout
    }
}

/// Per-period stage counts for the cycle-time chart
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleTimeRecord {
    pub month: String,
    pub intake: u32,
    pub evaluation: u32,
    pub performance: u32,
    pub closeout: u32,
}

/// Active task as returned by the dashboard API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    /// Raw due date, either `YYYY-MM-DD` or a date-time string
    pub due_date: String,
    pub assigned_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_by: Option<String>,
    pub contract_id: String,
    pub created_at: String,
}

impl Entity for Task {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSummary {
    pub total_tasks: u32,
    pub pending_tasks: u32,
    pub in_progress_tasks: u32,
    pub completed_tasks: u32,
    pub high_priority_tasks: u32,
}

/// One fetch of the active-task endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub summary: TaskSummary,
}

/// Compliance assessment of one contract clause
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseCompliance {
    pub contract_id: String,
    pub clause_id: String,
    pub title: String,
    pub compliance_summary: String,
    pub compliance_confidence: f64,
    pub closeout_status: String,
    pub risk_assessment: String,
}
