//! Task Table Helpers

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Urgency badge derived from days until due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Overdue,
    Urgent,
    Upcoming,
    Scheduled,
}

impl DueStatus {
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        match (due - today).num_days() {
            d if d < 0 => DueStatus::Overdue,
            d if d <= 2 => DueStatus::Urgent,
            d if d <= 7 => DueStatus::Upcoming,
            _ => DueStatus::Scheduled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "overdue",
            DueStatus::Urgent => "urgent",
            DueStatus::Upcoming => "upcoming",
            DueStatus::Scheduled => "scheduled",
        }
    }
}

/// Accepts `2024-06-05`, `2024-06-05T17:00:00` and `2024-06-05 17:00:00`
/// with or without fractional seconds or zone suffix.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// `Jun 5, 2024`
pub fn display_due_date(raw: &str) -> Option<String> {
    parse_due_date(raw).map(|d| d.format("%b %-d, %Y").to_string())
}

/// Unparseable due dates have no status.
pub fn task_due_status(task: &Task, today: NaiveDate) -> Option<DueStatus> {
    parse_due_date(&task.due_date).map(|due| DueStatus::classify(due, today))
}

/// One page of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based index of the first row; 0 when the page is empty
    pub first: usize,
    /// 1-based index of the last row
    pub last: usize,
    pub page_count: usize,
}

/// `page` is 1-based and clamped into range; `per_page` of 0 is treated as 1.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let page_count = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, page_count);
    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        first: if start == end { 0 } else { start + 1 },
        last: end,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_classify() {
        let today = date("2024-06-03");
        assert_eq!(DueStatus::classify(date("2024-06-02"), today), DueStatus::Overdue);
        assert_eq!(DueStatus::classify(date("2024-06-03"), today), DueStatus::Urgent);
        assert_eq!(DueStatus::classify(date("2024-06-05"), today), DueStatus::Urgent);
        assert_eq!(DueStatus::classify(date("2024-06-06"), today), DueStatus::Upcoming);
        assert_eq!(DueStatus::classify(date("2024-06-10"), today), DueStatus::Upcoming);
        assert_eq!(DueStatus::classify(date("2024-06-11"), today), DueStatus::Scheduled);
    }

    #[test]
    fn test_parse_due_date() {
        let expected = Some(date("2024-06-05"));
        assert_eq!(parse_due_date("2024-06-05"), expected);
        assert_eq!(parse_due_date("2024-06-05T17:30:00"), expected);
        assert_eq!(parse_due_date("2024-06-05T17:30:00.123456"), expected);
        assert_eq!(parse_due_date("2024-06-05T17:30:00Z"), expected);
        assert_eq!(parse_due_date("2024-06-05 17:30:00"), expected);
        assert_eq!(parse_due_date("soon"), None);
        assert_eq!(parse_due_date(""), None);
        assert_eq!(display_due_date("2024-06-05").as_deref(), Some("Jun 5, 2024"));
    }

    #[test]
    fn test_task_without_due_date() {
        let task = Task::default();
        assert_eq!(task_due_status(&task, date("2024-06-03")), None);
    }

    #[test]
    fn test_paginate() {
        let rows: Vec<u32> = (1..=12).collect();
        let first = paginate(&rows, 1, 5);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);
        assert_eq!((first.first, first.last, first.page_count), (1, 5, 3));

        let last = paginate(&rows, 3, 5);
        assert_eq!(last.items, &[11, 12]);
        assert_eq!((last.first, last.last), (11, 12));

        assert_eq!(paginate(&rows, 9, 5).items, &[11, 12]);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 1, 5);
        assert!(page.items.is_empty());
        assert_eq!((page.first, page.last, page.page_count), (0, 0, 1));
    }
}
