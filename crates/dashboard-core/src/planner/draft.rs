//! Milestone Draft
//!
//! Uncommitted form state. Editing a draft never touches the committed
//! milestone list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainError, DomainResult, Milestone, MilestoneId, MilestoneStatus, MilestoneType,
    NewMilestone,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MilestoneDraft {
    pub title: String,
    pub milestone_type: MilestoneType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    /// May hold blank rows while the form is being filled in
    pub assignees: Vec<String>,
    /// Carried through edits. Creation always submits `Pending`.
    pub status: MilestoneStatus,
    pub has_warning: Option<bool>,
}

/// Parse an `<input type="date">` value. Blank or malformed input is `None`.
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl MilestoneDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the form from a committed milestone
    pub fn from_milestone(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            milestone_type: milestone.milestone_type,
            start_date: Some(milestone.start_date),
            end_date: Some(milestone.end_date),
            description: milestone.description.clone(),
            assignees: milestone.assignees.clone(),
            status: milestone.status,
            has_warning: milestone.has_warning,
        }
    }

    pub fn add_assignee(&mut self) {
        self.assignees.push(String::new());
    }

    /// Out-of-range indices are ignored.
    pub fn update_assignee(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.assignees.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Out-of-range indices are ignored.
    pub fn remove_assignee(&mut self, index: usize) {
        if index < self.assignees.len() {
            self.assignees.remove(index);
        }
    }

    /// Assignees with blank rows dropped
    pub fn cleaned_assignees(&self) -> Vec<String> {
        self.assignees
            .iter()
            .filter(|a| !a.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Required fields present and dates in order; returns `(start, end)`.
    pub fn validate(&self) -> DomainResult<(NaiveDate, NaiveDate)> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.start_date.is_none() {
            missing.push("start date");
        }
        if self.end_date.is_none() {
            missing.push("end date");
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if missing.is_empty() => {
                if end < start {
                    return Err(DomainError::InvalidInput(format!(
                        "end date {} is before start date {}",
                        end, start
                    )));
                }
                Ok((start, end))
            }
            _ => Err(DomainError::InvalidInput(format!("missing {}", missing.join(", ")))),
        }
    }

    /// Create payload: status forced to pending, blank assignees dropped
    pub fn to_new_milestone(&self) -> DomainResult<NewMilestone> {
        let (start_date, end_date) = self.validate()?;
        Ok(NewMilestone {
            title: self.title.clone(),
            milestone_type: self.milestone_type,
            start_date,
            end_date,
            status: MilestoneStatus::Pending,
            description: self.description.clone(),
            assignees: self.cleaned_assignees(),
            has_warning: self.has_warning,
        })
    }

    /// Full replacement record for `id`
    pub fn to_milestone(&self, id: MilestoneId) -> DomainResult<Milestone> {
        let (start_date, end_date) = self.validate()?;
        Ok(Milestone {
            id,
            title: self.title.clone(),
            milestone_type: self.milestone_type,
            start_date,
            end_date,
            status: self.status,
            description: self.description.clone(),
            assignees: self.cleaned_assignees(),
            has_warning: self.has_warning,
        })
    }
}
