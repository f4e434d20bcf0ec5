use checklist_shared::{
  CloseTrigger,
  EditFormPlan,
  ModalState,
  NotificationKind,
  NotificationLifecycle,
  NotificationPhase,
  RequestSequence,
  SubmitDecision,
  TaskStats,
  TaskView,
  ToggleOutcome,
  UiConfig,
  decide_submit
};

const PRESET_CATEGORIES: [&str; 4] =
  ["General", "Work", "Personal", "Shopping"];

#[test]
fn detail_response_populates_edit_form() {
  let body = r#"{"id":42,"task":"Buy milk","category":"Errands","priority":"High","dueDate":"2024-05-01","completed":false}"#;
  let task: TaskView =
    serde_json::from_str(body).expect("decode task");
  let config = UiConfig::default();

  let plan = EditFormPlan::from_task(
    &task,
    &PRESET_CATEGORIES[..],
    &config.endpoints,
  );

  assert_eq!(plan.task_id.as_str(), "42");
  assert_eq!(plan.description, "Buy milk");
  assert_eq!(plan.category, "Errands");
  assert!(plan.add_category_option);
  assert_eq!(plan.priority, "High");
  assert_eq!(plan.due_date, "2024-05-01");
  assert!(!plan.completed);
  assert_eq!(plan.action, "/update/42");
}

#[test]
fn stale_detail_response_is_dropped() {
  let mut seq = RequestSequence::new();
  let mut modal = ModalState::default();

  modal = modal.open();
  let first_click = seq.begin();
  let second_click = seq.begin();
  assert!(!seq.is_current(first_click));
  assert!(seq.is_current(second_click));

  modal = modal.close(CloseTrigger::Escape);
  seq.invalidate();
  assert!(!modal.is_open());
  assert!(!seq.is_current(second_click));
}

#[test]
fn blank_submissions_never_reach_the_server() {
  for raw in ["", "   ", "\n\t"] {
    assert!(matches!(
      decide_submit(false, raw),
      SubmitDecision::Reject(_)
    ));
  }
  assert_eq!(
    decide_submit(false, "Water plants"),
    SubmitDecision::Proceed
  );
}

#[test]
fn toggle_success_then_stats_balance() {
  let mut rows = vec![false, true, false];

  let checked = true;
  let outcome = ToggleOutcome::resolve(checked, true);
  let ToggleOutcome::Applied { row, .. } = outcome else {
    panic!("expected applied outcome");
  };
  rows[0] = row.completed;
  assert_eq!(row.title_decoration(), "line-through");

  let stats = TaskStats::from_completion(rows.iter().copied());
  assert_eq!(stats.completed, 2);
  assert_eq!(stats.total, stats.completed + stats.pending);
}

#[test]
fn toggle_failure_reverts_and_reports() {
  let before = false;
  let checked = !before;
  let outcome = ToggleOutcome::resolve(checked, false);
  assert_eq!(outcome.notification().0, NotificationKind::Error);
  let ToggleOutcome::Reverted { checked: after, .. } = outcome else {
    panic!("expected revert");
  };
  assert_eq!(after, before);
}

#[test]
fn all_close_paths_share_end_state() {
  let ends: Vec<_> = [
    CloseTrigger::CloseButton,
    CloseTrigger::CancelButton,
    CloseTrigger::Overlay,
    CloseTrigger::Escape,
  ]
  .into_iter()
  .map(|trigger| ModalState::Open.close(trigger))
  .collect();

  assert!(ends.iter().all(|state| *state == ModalState::Closed));
  assert!(ends.iter().all(|state| state.body_overflow().is_empty()));
}

#[test]
fn notification_lifecycle_within_deadline() {
  let config = UiConfig::default();
  let deadline = config.notification_schedule().auto_removal_deadline_ms();
  assert!(deadline > 5_000);
  assert!(deadline <= 5_500);

  let mut manual = NotificationLifecycle::new();
  assert!(manual.begin_dismiss());
  // the timed dismissal fires later and must not restart the exit
  assert!(!manual.begin_dismiss());
  assert!(manual.finish());
  assert_eq!(manual.phase(), NotificationPhase::Removed);
}

#[test]
fn default_entrance_pacing() {
  let config = UiConfig::default();
  assert_eq!(config.stagger_ms, 50);
  assert_eq!(checklist_shared::decor::ENTRANCE_MS, 400);
  assert_eq!(checklist_shared::decor::entrance_delay_ms(4, config.stagger_ms), 200);
}

#[test]
fn bad_endpoint_config_is_rejected() {
  let result = UiConfig::from_toml_str(
    r#"
[endpoints]
task_detail = "/task/{id}/{id}"
"#,
  );
  assert!(result.is_err());
}
