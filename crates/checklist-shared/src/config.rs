use serde::{
  Deserialize,
  Serialize
};

use crate::error::ConfigError;
use crate::notification::NotificationSchedule;
use crate::routes::Endpoints;

/// Timings and endpoint templates for the page controller.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  /// Busy-button pause before the browser is allowed to submit a form.
  pub submit_delay_ms:          u32,
  pub notification_duration_ms: u32,
  pub notification_exit_ms:     u32,
  /// Gap between entrance animations of consecutive task rows.
  pub stagger_ms:               u32,
  pub endpoints:                Endpoints
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      submit_delay_ms:          500,
      notification_duration_ms: 5_000,
      notification_exit_ms:     300,
      stagger_ms:               50,
      endpoints:
        Endpoints::default()
    }
  }
}

impl UiConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let config: Self =
      toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
  }

  pub fn notification_schedule(
    &self
  ) -> NotificationSchedule {
    NotificationSchedule::new(
      self.notification_duration_ms,
      self.notification_exit_ms
    )
  }

  pub fn validate(
    &self
  ) -> Result<(), ConfigError> {
    if self.notification_duration_ms == 0 {
      return Err(
        ConfigError::InvalidDuration {
          name: "notification_duration_ms"
        }
      );
    }
    if self.notification_exit_ms == 0 {
      return Err(
        ConfigError::InvalidDuration {
          name: "notification_exit_ms"
        }
      );
    }
    self.endpoints.validate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_yields_defaults() {
    let config =
      UiConfig::from_toml_str("")
        .expect("empty config");
    assert_eq!(config, UiConfig::default());
  }

  #[test]
  fn partial_overrides_keep_other_defaults() {
    let config = UiConfig::from_toml_str(
      r#"
submit_delay_ms = 0

[endpoints]
toggle = "/api/tasks/{id}/toggle"
"#
    )
    .expect("partial config");
    assert_eq!(config.submit_delay_ms, 0);
    assert_eq!(
      config.notification_duration_ms,
      5_000
    );
    assert_eq!(
      config.endpoints.toggle,
      "/api/tasks/{id}/toggle"
    );
    assert_eq!(
      config.endpoints.update,
      "/update/{id}"
    );
  }

  #[test]
  fn default_schedule_removes_banner_after_five_seconds() {
    let schedule =
      UiConfig::default().notification_schedule();
    assert_eq!(schedule.dismiss_at_ms, 5_000);
    let deadline =
      schedule.auto_removal_deadline_ms();
    assert!(deadline > 5_000 && deadline <= 5_500);
  }

  #[test]
  fn zero_notification_duration_rejected() {
    let result = UiConfig::from_toml_str(
      "notification_duration_ms = 0"
    );
    assert!(matches!(
      result,
      Err(ConfigError::InvalidDuration {
        name: "notification_duration_ms"
      })
    ));
  }

  #[test]
  fn malformed_toml_is_parse_error() {
    assert!(matches!(
      UiConfig::from_toml_str(
        "stagger_ms = \"fast\""
      ),
      Err(ConfigError::Parse(_))
    ));
  }
}
