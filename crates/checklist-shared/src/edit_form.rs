use crate::routes::Endpoints;
use crate::task::{
  TaskId,
  TaskView
};

/// Everything the edit form needs to show one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormPlan {
  pub task_id:             TaskId,
  pub description:         String,
  pub category:            String,
  /// Set when `category` is not one of the `<select>` options yet.
  pub add_category_option: bool,
  pub priority:            String,
  pub due_date:            String,
  pub completed:           bool,
  pub action:              String
}

impl EditFormPlan {
  pub fn from_task<S>(
    task: &TaskView,
    category_options: &[S],
    endpoints: &Endpoints
  ) -> Self
  where
    S: AsRef<str>
  {
    let category =
      task.category().to_string();
    let add_category_option =
      !category_options.iter().any(
        |option| option.as_ref() == category
      );

    Self {
      task_id: task.id.clone(),
      description: task.task.clone(),
      category,
      add_category_option,
      priority: task.priority().to_string(),
      due_date: task.due_date_input(),
      completed: task.completed,
      action: endpoints
        .update_url(&task.id)
    }
  }

  /// Form value for `editCompleted`; the update route compares it to
  /// `"true"`.
  pub fn completed_value(
    &self
  ) -> &'static str {
    if self.completed { "true" } else { "false" }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn presets() -> Vec<String> {
    ["General", "Work", "Personal"]
      .map(String::from)
      .to_vec()
  }

  fn view(category: Option<&str>) -> TaskView {
    TaskView {
      id:        TaskId::from(9),
      task:      "Plan trip".to_string(),
      category:  category.map(String::from),
      priority:  None,
      due_date:  None,
      completed: true
    }
  }

  #[test]
  fn known_category_is_not_added() {
    let plan = EditFormPlan::from_task(
      &view(Some("Work")),
      &presets()[..],
      &Endpoints::default()
    );
    assert_eq!(plan.category, "Work");
    assert!(!plan.add_category_option);
    assert_eq!(plan.priority, "Medium");
    assert!(plan.completed);
  }

  #[test]
  fn unknown_category_is_added() {
    let plan = EditFormPlan::from_task(
      &view(Some("Garden")),
      &presets()[..],
      &Endpoints::default()
    );
    assert!(plan.add_category_option);
  }

  #[test]
  fn missing_category_falls_back_to_general() {
    let plan = EditFormPlan::from_task(
      &view(None),
      &presets()[..],
      &Endpoints::default()
    );
    assert_eq!(plan.category, "General");
    assert!(!plan.add_category_option);
    assert_eq!(plan.action, "/update/9");
  }

  #[test]
  fn completed_value_is_form_text() {
    let mut plan = EditFormPlan::from_task(
      &view(None),
      &presets()[..],
      &Endpoints::default()
    );
    assert_eq!(plan.completed_value(), "true");
    plan.completed = false;
    assert_eq!(plan.completed_value(), "false");
  }
}
