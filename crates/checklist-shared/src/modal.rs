pub const ACTIVE_CLASS: &str = "active";
pub const ESCAPE_KEY: &str = "Escape";

pub const MODAL_ID: &str = "editModal";
/// The dialog box inside the overlay; hosts the loading cover.
pub const DIALOG_SELECTOR: &str =
  ".edit-modal";
pub const CLOSE_BUTTON_SELECTOR: &str =
  ".close-modal";
pub const CANCEL_BUTTON_ID: &str =
  "cancelEditBtn";
pub const LOADING_ID: &str =
  "modalLoadingOverlay";

/// Inline styles that make the loading indicator cover the dialog.
pub const LOADING_STYLES: [(&str, &str); 11] = [
  ("position", "absolute"),
  ("top", "0"),
  ("left", "0"),
  ("right", "0"),
  ("bottom", "0"),
  ("background", "rgba(255, 253, 245, 0.9)"),
  ("display", "flex"),
  ("align-items", "center"),
  ("justify-content", "center"),
  ("z-index", "10"),
  ("border-radius", "16px")
];

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum ModalState {
  #[default]
  Closed,
  Open
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CloseTrigger {
  CloseButton,
  CancelButton,
  Overlay,
  Escape,
  /// The detail fetch failed; not a user action.
  LoadFailed
}

impl CloseTrigger {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::CloseButton => "close_button",
      | Self::CancelButton => {
        "cancel_button"
      }
      | Self::Overlay => "overlay",
      | Self::Escape => "escape",
      | Self::LoadFailed => "load_failed"
    }
  }
}

impl ModalState {
  pub fn is_open(self) -> bool {
    self == Self::Open
  }

  /// Value for `document.body.style.overflow`.
  pub fn body_overflow(
    self
  ) -> &'static str {
    match self {
      | Self::Open => "hidden",
      | Self::Closed => ""
    }
  }

  pub fn open(self) -> Self {
    Self::Open
  }

  /// Every trigger ends in the same place.
  pub fn close(
    self,
    _trigger: CloseTrigger
  ) -> Self {
    Self::Closed
  }

  /// Escape only means something while the dialog is up.
  pub fn close_trigger_for_key(
    self,
    key: &str
  ) -> Option<CloseTrigger> {
    (self.is_open() && key == ESCAPE_KEY)
      .then_some(CloseTrigger::Escape)
  }

  /// Clicks bubble up from the dialog body; only a click that lands on the
  /// overlay itself closes it.
  pub fn close_trigger_for_click(
    self,
    target_is_overlay: bool
  ) -> Option<CloseTrigger> {
    (self.is_open() && target_is_overlay)
      .then_some(CloseTrigger::Overlay)
  }
}
