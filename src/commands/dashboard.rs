//! Dashboard Commands
//!
//! Frontend bindings for the read-only dashboard feeds.

use chrono::Utc;
use dashboard_core::dashboard::{DashboardClient, FeedKind, TaskQuery};
use dashboard_core::DashboardConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{AppStore, AppStateStoreFields};

fn dashboard_client(config: &DashboardConfig) -> Option<DashboardClient> {
    DashboardClient::from_config(config)
        .map_err(|e| log::error!("Dashboard client unavailable: {}", e))
        .ok()
}

/// Refetch one feed and fold the result into the store. Failures keep the
/// data already on screen.
pub async fn refresh_feed(store: AppStore, config: DashboardConfig, kind: FeedKind) {
    let Some(client) = dashboard_client(&config) else {
        return;
    };
    store.dashboard().write().begin_refresh(kind);
    let update = client.fetch(kind, &TaskQuery::from_config(&config)).await;
    store.dashboard().write().apply(update, Utc::now());
}

/// Refetch all four feeds concurrently. Skipped while any feed is in
/// flight, so the snapshot written back cannot drop another result.
pub fn refresh_dashboard(store: AppStore, config: &DashboardConfig) {
    if store.dashboard().with_untracked(|state| state.is_loading()) {
        return;
    }
    let Some(client) = dashboard_client(config) else {
        return;
    };
    let query = TaskQuery::from_config(config);
    for kind in FeedKind::ALL {
        store.dashboard().write().begin_refresh(kind);
    }
    let mut state = store.dashboard().get_untracked();
    spawn_local(async move {
        state.refresh(&client, &query, Utc::now()).await;
        store.dashboard().set(state);
    });
}

/// Periodic tick: refresh only feeds whose interval has elapsed and that
/// are not already in flight.
pub fn refresh_due_feeds(store: AppStore, config: &DashboardConfig) {
    let now = Utc::now();
    let interval = config.refresh_interval();
    let due: Vec<FeedKind> = store.dashboard().with_untracked(|state| {
        FeedKind::ALL
            .into_iter()
            .filter(|kind| state.is_due(*kind, now, interval))
            .collect()
    });
    for kind in due {
        spawn_local(refresh_feed(store, config.clone(), kind));
    }
}
