//! Dashboard Feeds
//!
//! A feed keeps its last good data through failures. The user sees a
//! fixed per-feed message; the detailed cause goes to the log.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::client::{DashboardClient, TaskQuery};
use crate::config::DashboardConfig;
use crate::domain::{
    ClauseCompliance, ContractSummary, CycleTimeRecord, DomainError, DomainResult, TaskPage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    ContractSummary,
    CycleTime,
    ActiveTasks,
    Compliance,
}

impl FeedKind {
    pub const ALL: [FeedKind; 4] = [
        FeedKind::ContractSummary,
        FeedKind::CycleTime,
        FeedKind::ActiveTasks,
        FeedKind::Compliance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::ContractSummary => "contract summary",
            FeedKind::CycleTime => "cycle time",
            FeedKind::ActiveTasks => "active tasks",
            FeedKind::Compliance => "compliance",
        }
    }

    /// Message shown in place of the underlying error
    pub fn failure_message(&self) -> &'static str {
        match self {
            FeedKind::ContractSummary => "Failed to load contract data",
            FeedKind::CycleTime => "Failed to load cycle time data",
            FeedKind::ActiveTasks => "Failed to load tasks",
            FeedKind::Compliance => "Failed to load compliance data",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T> {
    kind: FeedKind,
    data: T,
    loading: bool,
    error: Option<String>,
    last_error: Option<DomainError>,
    last_success: Option<DateTime<Utc>>,
    last_attempt: Option<DateTime<Utc>>,
    consecutive_failures: u32,
}

impl<T> Feed<T> {
    /// Feed showing `fallback` until its first successful refresh
    pub fn new(kind: FeedKind, fallback: T) -> Self {
        Self {
            kind,
            data: fallback,
            loading: false,
            error: None,
            last_error: None,
            last_success: None,
            last_attempt: None,
            consecutive_failures: 0,
        }
    }

    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message while the data is stale
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_error(&self) -> Option<&DomainError> {
        self.last_error.as_ref()
    }

    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn is_stale(&self) -> bool {
        self.error.is_some()
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Fold one fetch result in. On failure the previous data stays.
    pub fn apply(&mut self, result: DomainResult<T>, now: DateTime<Utc>) {
        self.loading = false;
        self.last_attempt = Some(now);
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
                self.last_error = None;
                self.last_success = Some(now);
                self.consecutive_failures = 0;
            }
            Err(e) => {
                self.consecutive_failures += 1;
                log::warn!(
                    "Error fetching {} ({} in a row): {}",
                    self.kind.label(),
                    self.consecutive_failures,
                    e
                );
                self.error = Some(self.kind.failure_message().to_string());
                self.last_error = Some(e);
            }
        }
    }

    /// Never-attempted feeds are always due.
    pub fn is_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        if self.loading {
            return false;
        }
        match self.last_attempt {
            None => true,
            Some(at) => (now - at).to_std().map_or(false, |elapsed| elapsed >= interval),
        }
    }
}

/// Result of fetching one feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    ContractSummary(DomainResult<ContractSummary>),
    CycleTime(DomainResult<Vec<CycleTimeRecord>>),
    ActiveTasks(DomainResult<TaskPage>),
    Compliance(DomainResult<Vec<ClauseCompliance>>),
}

impl FeedUpdate {
    pub fn kind(&self) -> FeedKind {
        match self {
            FeedUpdate::ContractSummary(_) => FeedKind::ContractSummary,
            FeedUpdate::CycleTime(_) => FeedKind::CycleTime,
            FeedUpdate::ActiveTasks(_) => FeedKind::ActiveTasks,
            FeedUpdate::Compliance(_) => FeedKind::Compliance,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            FeedUpdate::ContractSummary(r) => r.is_ok(),
            FeedUpdate::CycleTime(r) => r.is_ok(),
            FeedUpdate::ActiveTasks(r) => r.is_ok(),
            FeedUpdate::Compliance(r) => r.is_ok(),
        }
    }
}

/// The four feeds behind the dashboard view
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub contract_summary: Feed<ContractSummary>,
    pub cycle_time: Feed<Vec<CycleTimeRecord>>,
    pub tasks: Feed<TaskPage>,
    pub compliance: Feed<Vec<ClauseCompliance>>,
}

impl DashboardState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            contract_summary: Feed::new(FeedKind::ContractSummary, defaults.contract_summary),
            cycle_time: Feed::new(FeedKind::CycleTime, defaults.cycle_time.clone()),
            tasks: Feed::new(FeedKind::ActiveTasks, defaults.tasks.clone()),
            compliance: Feed::new(FeedKind::Compliance, defaults.compliance.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.contract_summary.is_loading()
            || self.cycle_time.is_loading()
            || self.tasks.is_loading()
            || self.compliance.is_loading()
    }

    /// User-facing message for one feed
    pub fn error(&self, kind: FeedKind) -> Option<&str> {
        match kind {
            FeedKind::ContractSummary => self.contract_summary.error(),
            FeedKind::CycleTime => self.cycle_time.error(),
            FeedKind::ActiveTasks => self.tasks.error(),
            FeedKind::Compliance => self.compliance.error(),
        }
    }

    pub fn is_feed_loading(&self, kind: FeedKind) -> bool {
        match kind {
            FeedKind::ContractSummary => self.contract_summary.is_loading(),
            FeedKind::CycleTime => self.cycle_time.is_loading(),
            FeedKind::ActiveTasks => self.tasks.is_loading(),
            FeedKind::Compliance => self.compliance.is_loading(),
        }
    }

    pub fn is_due(&self, kind: FeedKind, now: DateTime<Utc>, interval: Duration) -> bool {
        match kind {
            FeedKind::ContractSummary => self.contract_summary.is_due(now, interval),
            FeedKind::CycleTime => self.cycle_time.is_due(now, interval),
            FeedKind::ActiveTasks => self.tasks.is_due(now, interval),
            FeedKind::Compliance => self.compliance.is_due(now, interval),
        }
    }

    /// Feeds currently showing stale data
    pub fn failed(&self) -> Vec<FeedKind> {
        FeedKind::ALL
            .into_iter()
            .filter(|kind| self.error(*kind).is_some())
            .collect()
    }

    pub fn begin_refresh(&mut self, kind: FeedKind) {
        match kind {
            FeedKind::ContractSummary => self.contract_summary.begin_refresh(),
            FeedKind::CycleTime => self.cycle_time.begin_refresh(),
            FeedKind::ActiveTasks => self.tasks.begin_refresh(),
            FeedKind::Compliance => self.compliance.begin_refresh(),
        }
    }

    /// Fold one fetch result into the feed it belongs to
    pub fn apply(&mut self, update: FeedUpdate, now: DateTime<Utc>) {
        match update {
            FeedUpdate::ContractSummary(result) => self.contract_summary.apply(result, now),
            FeedUpdate::CycleTime(result) => self.cycle_time.apply(result, now),
            FeedUpdate::ActiveTasks(result) => self.tasks.apply(result, now),
            FeedUpdate::Compliance(result) => self.compliance.apply(result, now),
        }
    }

    /// Fetch all four feeds concurrently. Each one succeeds or fails on its own.
    pub async fn refresh(&mut self, client: &DashboardClient, query: &TaskQuery, now: DateTime<Utc>) {
        for kind in FeedKind::ALL {
            self.begin_refresh(kind);
        }

        let updates =
            futures::future::join_all(FeedKind::ALL.map(|kind| client.fetch(kind, query))).await;
        for update in updates {
            self.apply(update, now);
        }
        log::debug!("Dashboard refreshed, {} feed(s) stale", self.failed().len());
    }
}
