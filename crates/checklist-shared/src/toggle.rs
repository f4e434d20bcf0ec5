use crate::notification::NotificationKind;

pub const COMPLETED_CLASS: &str =
  "completed";

/// Visual completed state of one task row.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct RowVisual {
  pub completed: bool
}

impl RowVisual {
  /// `text-decoration` for the row title.
  pub fn title_decoration(
    self
  ) -> &'static str {
    if self.completed {
      "line-through"
    } else {
      "none"
    }
  }
}

/// What to do with a row once its toggle request has settled.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum ToggleOutcome {
  Applied {
    row:     RowVisual,
    message: &'static str
  },
  Reverted {
    checked: bool,
    message: &'static str
  }
}

impl ToggleOutcome {
  /// `checked` is the checkbox state after the user's click. The browser
  /// flips it before the change event fires, so the prior state is its
  /// negation.
  pub fn resolve(
    checked: bool,
    succeeded: bool
  ) -> Self {
    if succeeded {
      Self::Applied {
        row:     RowVisual {
          completed: checked
        },
        message: if checked {
          "Task marked as completed"
        } else {
          "Task marked as incomplete"
        }
      }
    } else {
      Self::Reverted {
        checked: !checked,
        message: "Failed to update task"
      }
    }
  }

  pub fn notification(
    &self
  ) -> (NotificationKind, &'static str) {
    match self {
      | Self::Applied {
        message,
        ..
      } => {
        (NotificationKind::Success, *message)
      }
      | Self::Reverted {
        message,
        ..
      } => (NotificationKind::Error, *message)
    }
  }
}
