//! Timeline Coordinates
//!
//! Maps calendar dates onto percentage offsets inside a [`ProjectWindow`].
//! Every coordinate is clamped to `[0, 100]`; a zero-length window is an
//! error rather than a division by zero.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Milestone, MilestoneId, ProjectWindow};

/// Horizontal placement of a bar, in percent of the window width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePosition {
    pub left: f64,
    pub width: f64,
}

impl TimelinePosition {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// `left: ..%; width: ..%` for an inline style attribute
    pub fn to_css(&self) -> String {
        format!("left: {}; width: {}", format_percent(self.left), format_percent(self.width))
    }
}

/// A month boundary marker on the timeline axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLabel {
    /// Abbreviated month name, e.g. `May`
    pub name: String,
    pub position: f64,
}

/// Bar for one milestone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineBar {
    pub id: MilestoneId,
    pub position: TimelinePosition,
}

fn nonzero_days(window: &ProjectWindow) -> DomainResult<f64> {
    match window.total_days() {
        0 => Err(DomainError::EmptyWindow),
        days => Ok(days as f64),
    }
}

fn offset_percent(date: NaiveDate, window: &ProjectWindow, total_days: f64) -> f64 {
    let days = (date - window.start_date()).num_days() as f64;
    (days / total_days * 100.0).clamp(0.0, 100.0)
}

/// Position of `item_start..item_end` within the window.
///
/// Bars reaching outside the window are cut at its edges; an inverted
/// range collapses to zero width.
pub fn timeline_position(
    item_start: NaiveDate,
    item_end: NaiveDate,
    window: &ProjectWindow,
) -> DomainResult<TimelinePosition> {
    let total_days = nonzero_days(window)?;
    let left = offset_percent(item_start, window, total_days);
    let right = offset_percent(item_end, window, total_days);
    Ok(TimelinePosition { left, width: (right - left).max(0.0) })
}

/// Month-start markers that fall inside the window, in calendar order
pub fn month_labels(window: &ProjectWindow) -> DomainResult<Vec<MonthLabel>> {
    let total_days = nonzero_days(window)?;
    let mut labels = Vec::new();
    let Some(mut cursor) = window.start_date().with_day(1) else {
        return Ok(labels);
    };

    while cursor <= window.end_date() {
        if cursor >= window.start_date() {
            labels.push(MonthLabel {
                name: cursor.format("%b").to_string(),
                position: offset_percent(cursor, window, total_days),
            });
        }
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    Ok(labels)
}

/// Position of `today`, pinned to 0 before the window and 100 after it
pub fn today_position_at(window: &ProjectWindow, today: NaiveDate) -> DomainResult<f64> {
    let total_days = nonzero_days(window)?;
    if today < window.start_date() {
        return Ok(0.0);
    }
    if today > window.end_date() {
        return Ok(100.0);
    }
    Ok(offset_percent(today, window, total_days))
}

/// [`today_position_at`] for the local calendar date
pub fn today_position(window: &ProjectWindow) -> DomainResult<f64> {
    today_position_at(window, Local::now().date_naive())
}

/// Short display date: `Apr 25`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// CSS percentage: `12.5%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// One bar per milestone, in list order
pub fn layout_milestones(
    milestones: &[Milestone],
    window: &ProjectWindow,
) -> DomainResult<Vec<TimelineBar>> {
    milestones
        .iter()
        .map(|m| {
            Ok(TimelineBar {
                id: m.id,
                position: timeline_position(m.start_date, m.end_date, window)?,
            })
        })
        .collect()
}
