//! Transient status banners.
//!
//! Each banner owns its own element and timers. The lifecycle below is what
//! keeps a timed dismissal and a click on the close button from both trying
//! to animate out and remove the same element.

pub const BASE_CLASS: &str =
  "notification";
pub const TOP_OFFSET_PX: u32 = 20;
pub const STACK_SPACING_PX: u32 = 80;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NotificationKind {
  Success,
  Error,
  Info
}

impl NotificationKind {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error",
      | Self::Info => "info"
    }
  }

  pub fn css_class(self) -> String {
    format!(
      "{BASE_CLASS} {BASE_CLASS}-{}",
      self.as_key()
    )
  }

  pub fn accent_color(
    self
  ) -> &'static str {
    match self {
      | Self::Success => "#9BC5A1",
      | Self::Error => "#D64045",
      | Self::Info => "#C68E56"
    }
  }

  /// Font Awesome icon class rendered ahead of the message.
  pub fn icon_class(
    self
  ) -> &'static str {
    match self {
      | Self::Success => {
        "fas fa-check-circle"
      }
      | Self::Error => {
        "fas fa-exclamation-circle"
      }
      | Self::Info => "fas fa-info-circle"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum NotificationPhase {
  #[default]
  Visible,
  Dismissing,
  Removed
}

#[derive(Debug, Default)]
pub struct NotificationLifecycle {
  phase: NotificationPhase
}

impl NotificationLifecycle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn phase(&self) -> NotificationPhase {
    self.phase
  }

  /// Starts the exit animation. Returns false when a dismissal is already
  /// under way or finished.
  pub fn begin_dismiss(&mut self) -> bool {
    if self.phase
      != NotificationPhase::Visible
    {
      return false;
    }
    self.phase =
      NotificationPhase::Dismissing;
    true
  }

  /// Marks the element as detached. Returns false unless it was dismissing.
  pub fn finish(&mut self) -> bool {
    if self.phase
      != NotificationPhase::Dismissing
    {
      return false;
    }
    self.phase = NotificationPhase::Removed;
    true
  }
}

/// Top offset for a new banner given how many are already showing.
pub fn stack_offset_px(
  visible: usize
) -> u32 {
  let index =
    u32::try_from(visible).unwrap_or(u32::MAX);
  TOP_OFFSET_PX.saturating_add(
    STACK_SPACING_PX.saturating_mul(index)
  )
}

/// Timers for one banner, all in milliseconds.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct NotificationSchedule {
  /// Delay before the slide-in starts.
  pub enter_after_ms:  u32,
  /// Delay after creation before the timed dismissal.
  pub dismiss_at_ms:   u32,
  /// Length of the exit animation; the element is detached after it.
  pub remove_after_ms: u32
}

impl NotificationSchedule {
  pub const ENTER_AFTER_MS: u32 = 10;

  pub fn new(
    duration_ms: u32,
    exit_ms: u32
  ) -> Self {
    Self {
      enter_after_ms:  Self::ENTER_AFTER_MS,
      dismiss_at_ms:   duration_ms,
      remove_after_ms: exit_ms
    }
  }

  /// When an untouched banner is gone, counted from creation.
  pub fn auto_removal_deadline_ms(
    self
  ) -> u32 {
    self
      .dismiss_at_ms
      .saturating_add(self.remove_after_ms)
  }

  /// When a banner is gone, counted from a click on its close button.
  pub fn manual_removal_deadline_ms(
    self
  ) -> u32 {
    self.remove_after_ms
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn each_kind_has_distinct_accent() {
    let colors = [
      NotificationKind::Success,
      NotificationKind::Error,
      NotificationKind::Info
    ]
    .map(NotificationKind::accent_color);
    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[1], colors[2]);
    assert_ne!(colors[0], colors[2]);
  }

  #[test]
  fn css_class_carries_kind() {
    assert_eq!(
      NotificationKind::Error.css_class(),
      "notification notification-error"
    );
  }

  #[test]
  fn dismissal_runs_once() {
    let mut life =
      NotificationLifecycle::new();
    assert!(!life.finish());
    assert!(life.begin_dismiss());
    assert!(!life.begin_dismiss());
    assert!(life.finish());
    assert!(!life.finish());
    assert_eq!(
      life.phase(),
      NotificationPhase::Removed
    );
  }

  #[test]
  fn schedule_orders_enter_dismiss_remove() {
    let schedule =
      NotificationSchedule::new(5_000, 300);
    assert!(
      schedule.enter_after_ms
        < schedule.dismiss_at_ms
    );
    assert_eq!(
      schedule.auto_removal_deadline_ms(),
      5_300
    );
    assert_eq!(
      schedule.manual_removal_deadline_ms(),
      300
    );
  }

  #[test]
  fn accents_follow_page_palette() {
    assert_eq!(
      NotificationKind::Success.accent_color(),
      "#9BC5A1"
    );
    assert_eq!(
      NotificationKind::Error.accent_color(),
      "#D64045"
    );
    assert_eq!(
      NotificationKind::Info.accent_color(),
      "#C68E56"
    );
  }

  #[test]
  fn banners_stack_downwards() {
    assert_eq!(stack_offset_px(0), 20);
    assert_eq!(stack_offset_px(2), 180);
  }
}
