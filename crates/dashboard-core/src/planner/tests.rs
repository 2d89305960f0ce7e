//! Planner Tests
//!
//! MilestonePlanner against the in-memory store.

use chrono::NaiveDate;

use super::*;
use crate::domain::{MilestoneStatus, MilestoneType, NewMilestone};
use crate::store::{InMemoryMilestoneStore, MilestoneStore};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn seed(id: MilestoneId, title: &str, start: &str, end: &str) -> Milestone {
    NewMilestone {
        title: title.to_string(),
        milestone_type: MilestoneType::Rfi,
        start_date: date(start),
        end_date: date(end),
        status: MilestoneStatus::Completed,
        description: String::new(),
        assignees: vec!["John Doe".to_string()],
        has_warning: None,
    }
    .with_id(id)
}

fn draft(title: &str, start: &str, end: &str) -> MilestoneDraft {
    MilestoneDraft {
        title: title.to_string(),
        milestone_type: MilestoneType::Legal,
        start_date: parse_form_date(start),
        end_date: parse_form_date(end),
        ..MilestoneDraft::default()
    }
}

async fn setup_planner() -> MilestonePlanner<InMemoryMilestoneStore> {
    let store = InMemoryMilestoneStore::with_milestones(vec![
        seed(1, "RFI Release", "2024-04-15", "2024-04-20"),
        seed(2, "RFP Development", "2024-04-25", "2024-05-15"),
    ]);
    let mut planner = MilestonePlanner::new(store);
    planner.load().await;
    planner
}

#[tokio::test]
async fn test_load() {
    let planner = setup_planner().await;
    assert_eq!(planner.milestones().len(), 2);
    assert!(!planner.is_loading());
    assert!(planner.last_error().is_none());
    assert_eq!(planner.get(2).unwrap().title, "RFP Development");
}

#[tokio::test]
async fn test_load_failure_keeps_list() {
    let mut planner = setup_planner().await;
    planner.store().set_offline(true);

    planner.load().await;
    assert_eq!(planner.milestones().len(), 2);
    assert!(matches!(planner.last_error(), Some(DomainError::Transport(_))));

    planner.store().set_offline(false);
    planner.load().await;
    assert!(planner.last_error().is_none());
}

#[tokio::test]
async fn test_create_appends_pending_record() {
    let mut planner = setup_planner().await;

    let created = planner
        .create(&draft("Legal Review", "2024-06-16", "2024-06-25"))
        .await
        .expect("Create failed");

    assert_eq!(created.id, 3);
    assert_eq!(created.status, MilestoneStatus::Pending);
    assert_eq!(planner.milestones().last(), Some(&created));
    assert_eq!(planner.store().snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_create_rejects_blank_title_without_store_call() {
    let mut planner = setup_planner().await;
    planner.store().set_offline(true);

    // An offline store would fail with Transport; validation fails first.
    let err = planner
        .create(&draft("   ", "2024-06-16", "2024-06-25"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert_eq!(planner.milestones().len(), 2);
    assert!(planner.last_error().is_none());
}

#[tokio::test]
async fn test_create_rejects_inverted_dates() {
    let mut planner = setup_planner().await;
    let err = planner
        .create(&draft("Evaluation", "2024-06-15", "2024-05-20"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert_eq!(planner.store().snapshot().await.len(), 2);
}

#[tokio::test]
async fn test_failed_create_leaves_list_untouched() {
    let mut planner = setup_planner().await;
    planner.store().set_offline(true);

    let result = planner
        .create(&draft("Legal Review", "2024-06-16", "2024-06-25"))
        .await;
    assert!(result.is_err());
    assert_eq!(planner.milestones().len(), 2);
    assert!(planner.last_error().unwrap().is_remote());
}

#[tokio::test]
async fn test_update_replaces_entry() {
    let mut planner = setup_planner().await;

    let mut edit = MilestoneDraft::from_milestone(planner.get(2).unwrap());
    edit.title = "RFP Development (revised)".to_string();
    edit.end_date = parse_form_date("2024-05-20");

    let updated = planner.update(2, &edit).await.expect("Update failed");
    assert_eq!(updated.title, "RFP Development (revised)");
    assert_eq!(updated.status, MilestoneStatus::Completed);
    assert_eq!(planner.milestones().len(), 2);
    assert_eq!(planner.get(2).unwrap().end_date, date("2024-05-20"));
}

#[tokio::test]
async fn test_update_unknown_id() {
    let mut planner = setup_planner().await;
    planner.store().set_offline(true);

    let err = planner
        .update(99, &draft("Ghost", "2024-05-01", "2024-05-02"))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound("milestone 99".to_string()));
    assert!(planner.last_error().is_none());
}

#[tokio::test]
async fn test_delete() {
    let mut planner = setup_planner().await;

    planner.delete(1).await.expect("Delete failed");
    assert_eq!(planner.milestones().len(), 1);
    assert!(planner.get(1).is_none());
    assert_eq!(planner.store().snapshot().await.len(), 1);

    assert!(matches!(planner.delete(1).await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_failed_delete_keeps_entry() {
    let mut planner = setup_planner().await;
    planner.store().set_offline(true);

    assert!(planner.delete(1).await.is_err());
    assert!(planner.get(1).is_some());
}

#[tokio::test]
async fn test_submit_new_milestone() {
    let mut planner = setup_planner().await;
    planner.begin_new();
    {
        let form = planner.draft_mut().unwrap();
        form.title = "Final Award".to_string();
        form.milestone_type = MilestoneType::Award;
        form.start_date = parse_form_date("2024-06-26");
        form.end_date = parse_form_date("2024-06-30");
        form.add_assignee();
        form.update_assignee(0, "Director");
    }

    let saved = planner.submit().await.expect("Submit failed");
    assert_eq!(saved.assignees, vec!["Director".to_string()]);
    assert!(planner.session().is_idle());
    assert_eq!(planner.milestones().len(), 3);
}

#[tokio::test]
async fn test_submit_invalid_draft_stays_editing() {
    let mut planner = setup_planner().await;
    planner.begin_new();
    planner.draft_mut().unwrap().title = "No dates".to_string();

    assert!(planner.submit().await.is_err());
    assert_eq!(planner.session().error(), Some("Invalid input: missing start date, end date"));
    assert_eq!(planner.session().draft().unwrap().title, "No dates");
    assert_eq!(planner.milestones().len(), 2);
}

#[tokio::test]
async fn test_failed_submit_keeps_draft() {
    let mut planner = setup_planner().await;
    planner.begin_edit(1).unwrap();
    planner.draft_mut().unwrap().title = "RFI Release (moved)".to_string();
    planner.store().set_offline(true);

    assert!(planner.submit().await.is_err());
    assert_eq!(planner.session().target(), Some(EditTarget::Existing(1)));
    assert_eq!(planner.session().draft().unwrap().title, "RFI Release (moved)");
    assert!(planner.session().error().is_some());
    assert_eq!(planner.get(1).unwrap().title, "RFI Release");

    planner.store().set_offline(false);
    planner.submit().await.expect("Retry failed");
    assert_eq!(planner.get(1).unwrap().title, "RFI Release (moved)");
}

#[tokio::test]
async fn test_submit_after_entry_vanished_on_reload() {
    let mut planner = setup_planner().await;
    let session = EditSession::edit(planner.get(2).unwrap());

    planner.store().delete(2).await.unwrap();
    planner.load().await;
    assert!(planner.get(2).is_none());

    planner.restore_session(session);
    planner.draft_mut().unwrap().title = "RFP Development (late)".to_string();
    let err = planner.submit().await.unwrap_err();
    assert_eq!(err, DomainError::NotFound("milestone 2".to_string()));
    assert_eq!(planner.session().target(), Some(EditTarget::Existing(2)));
    assert_eq!(planner.session().error(), Some("Not found: milestone 2"));
    assert_eq!(planner.store().snapshot().await.len(), 1);
    assert_eq!(planner.milestones().len(), 1);
}

#[tokio::test]
async fn test_submit_without_open_form() {
    let mut planner = setup_planner().await;
    assert!(matches!(planner.submit().await, Err(DomainError::Conflict(_))));
    assert!(matches!(planner.begin_edit(42), Err(DomainError::NotFound(_))));

    planner.begin_new();
    planner.cancel();
    assert!(planner.session().is_idle());
}

#[tokio::test]
async fn test_timeline_bars() {
    let planner = setup_planner().await;
    let window = ProjectWindow::new(date("2024-04-15"), date("2024-06-30")).unwrap();

    let bars = planner.timeline(&window).unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].id, 1);
    assert_eq!(bars[0].position.left, 0.0);
    assert!((bars[1].position.left - 13.157_894_736_842_104).abs() < 1e-9);
    assert!((bars[1].position.width - 26.315_789_473_684_21).abs() < 1e-9);

    let empty = ProjectWindow::new(date("2024-05-01"), date("2024-05-01")).unwrap();
    assert_eq!(planner.timeline(&empty), Err(DomainError::EmptyWindow));
}
