use crate::error::ValidationError;
use crate::validate::validate_description;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum FormKind {
  Add,
  Edit
}

impl FormKind {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Add => "add",
      | Self::Edit => "edit"
    }
  }

  pub fn form_id(self) -> &'static str {
    match self {
      | Self::Add => "addTaskForm",
      | Self::Edit => "editTaskForm"
    }
  }

  /// Inner HTML of the submit button while the form is on its way out.
  pub fn busy_label(
    self
  ) -> &'static str {
    match self {
      | Self::Add => {
        "<i class=\"fas fa-spinner fa-spin\"></i> Adding..."
      }
      | Self::Edit => {
        "<i class=\"fas fa-spinner fa-spin\"></i> Updating..."
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum SubmitDecision {
  /// A submission is already pending for this form.
  Ignore,
  /// Block the native submit and tell the user why.
  Reject(ValidationError),
  /// Show the busy button, then let the browser submit.
  Proceed
}

pub fn decide_submit(
  busy: bool,
  description: &str
) -> SubmitDecision {
  if busy {
    return SubmitDecision::Ignore;
  }
  match validate_description(description)
  {
    | Ok(_) => SubmitDecision::Proceed,
    | Err(error) => {
      SubmitDecision::Reject(error)
    }
  }
}
