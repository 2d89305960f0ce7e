//! Milestone Entity
//!
//! A titled, dated, typed planning record on the solicitation timeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Store-assigned milestone identifier
pub type MilestoneId = u64;

/// Solicitation phase a milestone belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MilestoneType {
    #[default]
    #[serde(rename = "RFI")]
    Rfi,
    #[serde(rename = "RFP")]
    Rfp,
    Evaluation,
    Legal,
    Award,
    Other,
}

impl MilestoneType {
    /// All types, in form order
    pub const ALL: [MilestoneType; 6] = [
        MilestoneType::Rfi,
        MilestoneType::Rfp,
        MilestoneType::Evaluation,
        MilestoneType::Legal,
        MilestoneType::Award,
        MilestoneType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneType::Rfi => "RFI",
            MilestoneType::Rfp => "RFP",
            MilestoneType::Evaluation => "Evaluation",
            MilestoneType::Legal => "Legal",
            MilestoneType::Award => "Award",
            MilestoneType::Other => "Other",
        }
    }

    /// Parse the wire/form value; unknown values fall back to `Other`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "RFI" => MilestoneType::Rfi,
            "RFP" => MilestoneType::Rfp,
            "Evaluation" => MilestoneType::Evaluation,
            "Legal" => MilestoneType::Legal,
            "Award" => MilestoneType::Award,
            _ => MilestoneType::Other,
        }
    }
}

/// Lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Overdue => "overdue",
        }
    }
}

/// A planning milestone as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub description: String,
    /// Display names, in entry order. Not deduplicated.
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_warning: Option<bool>,
}

impl Milestone {
    /// Duration in whole days (end minus start).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn has_warning(&self) -> bool {
        self.has_warning.unwrap_or(false)
    }
}

impl Entity for Milestone {
    type Id = MilestoneId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create payload: a milestone before the store has assigned its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub title: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MilestoneStatus,
    pub description: String,
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_warning: Option<bool>,
}

impl NewMilestone {
    /// Attach the id assigned by a store
    pub fn with_id(self, id: MilestoneId) -> Milestone {
        Milestone {
            id,
            title: self.title,
            milestone_type: self.milestone_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            description: self.description,
            assignees: self.assignees,
            has_warning: self.has_warning,
        }
    }
}
