//! Milestone Commands
//!
//! Frontend bindings for the milestone planner. The planner owns the
//! committed list; after each call its state is copied into the store.
//! Calls queue on the planner lock, so a reload never interleaves with a
//! save that is still in flight.

use std::rc::Rc;

use dashboard_core::planner::EditSession;
use dashboard_core::{DomainError, DomainResult, HttpMilestoneStore, MilestonePlanner};
use leptos::prelude::*;
use tokio::sync::Mutex;

use crate::models::{Milestone, MilestoneId};
use crate::store::{AppStateStoreFields, AppStore};

pub type SharedPlanner = Rc<Mutex<MilestonePlanner<HttpMilestoneStore>>>;

pub fn shared_planner(store: HttpMilestoneStore) -> SharedPlanner {
    Rc::new(Mutex::new(MilestonePlanner::new(store)))
}

/// Copy the committed list and the last store failure into the app store
fn sync_list(store: AppStore, planner: &MilestonePlanner<HttpMilestoneStore>) {
    store.milestones().set(planner.milestones().to_vec());
    store
        .milestones_error()
        .set(planner.last_error().map(|e| e.to_string()));
}

fn report_unavailable(store: AppStore, error: &DomainError) {
    log::error!("Milestone store unavailable: {}", error);
    store.milestones_error().set(Some(error.to_string()));
}

pub async fn load_milestones(store: AppStore, planner: DomainResult<SharedPlanner>) {
    let planner = match planner {
        Ok(planner) => planner,
        Err(e) => return report_unavailable(store, &e),
    };
    store.milestones_loading().set(true);
    let mut planner = planner.lock().await;
    planner.load().await;
    sync_list(store, &planner);
    store.milestones_loading().set(false);
}

/// Submit a form session edited in the store. The resulting session,
/// closed on success or back in `Editing` with the error, replaces the
/// store's.
pub async fn submit_milestone(
    store: AppStore,
    planner: DomainResult<SharedPlanner>,
    mut session: EditSession,
) -> DomainResult<Milestone> {
    let planner = match planner {
        Ok(planner) => planner,
        Err(e) => {
            if session.begin_submit().is_ok() {
                session.fail(e.to_string());
            }
            store.edit_session().set(session);
            return Err(e);
        }
    };
    let mut planner = planner.lock().await;
    planner.restore_session(session);
    let result = planner.submit().await;
    sync_list(store, &planner);
    store.edit_session().set(planner.session().clone());
    planner.cancel();
    result
}

pub async fn delete_milestone(
    store: AppStore,
    planner: DomainResult<SharedPlanner>,
    id: MilestoneId,
) -> DomainResult<()> {
    let planner = match planner {
        Ok(planner) => planner,
        Err(e) => {
            report_unavailable(store, &e);
            return Err(e);
        }
    };
    let mut planner = planner.lock().await;
    let result = planner.delete(id).await;
    sync_list(store, &planner);
    if result.is_ok() && store.expanded_milestone().get_untracked() == Some(id) {
        store.expanded_milestone().set(None);
    }
    result
}
