//! Project Window
//!
//! The fixed calendar range all timeline coordinates are normalized against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult};

/// Bounding date range of the project timeline. `start_date <= end_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WindowBounds")]
pub struct ProjectWindow {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowBounds {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<WindowBounds> for ProjectWindow {
    type Error = DomainError;

    fn try_from(bounds: WindowBounds) -> DomainResult<Self> {
        ProjectWindow::new(bounds.start_date, bounds.end_date)
    }
}

impl ProjectWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> DomainResult<Self> {
        if end_date < start_date {
            return Err(DomainError::InvalidInput(format!(
                "project window ends ({}) before it starts ({})",
                end_date, start_date
            )));
        }
        Ok(Self { start_date, end_date })
    }

    /// Window between two dates given in either order
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self { start_date: a.min(b), end_date: a.max(b) }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Length in whole days. Zero when start equals end.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Clamp a date into the window
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        assert!(ProjectWindow::new(date("2024-06-30"), date("2024-04-15")).is_err());
        let window = ProjectWindow::new(date("2024-04-15"), date("2024-06-30")).unwrap();
        assert_eq!(window.total_days(), 76);
        assert!(window.contains(date("2024-05-01")));
        assert!(!window.contains(date("2024-07-01")));
        assert_eq!(window.clamp(date("2024-01-01")), date("2024-04-15"));
        assert_eq!(ProjectWindow::spanning(date("2024-06-30"), date("2024-04-15")), window);
    }

    #[test]
    fn test_window_deserialize_validates() {
        let ok: ProjectWindow =
            serde_json::from_str(r#"{"startDate":"2024-04-15","endDate":"2024-06-30"}"#).unwrap();
        assert_eq!(ok.start_date(), date("2024-04-15"));

        let bad = serde_json::from_str::<ProjectWindow>(
            r#"{"startDate":"2024-06-30","endDate":"2024-04-15"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_zero_length_window_is_constructible() {
        let window = ProjectWindow::new(date("2024-05-01"), date("2024-05-01")).unwrap();
        assert_eq!(window.total_days(), 0);
    }
}
