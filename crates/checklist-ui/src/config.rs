use checklist_shared::UiConfig;

const UI_CONFIG_TOML: &str =
  include_str!("../assets/ui.toml");

pub fn load_ui_config() -> UiConfig {
  match UiConfig::from_toml_str(
    UI_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        submit_delay_ms = config.submit_delay_ms,
        notification_duration_ms =
          config.notification_duration_ms,
        "loaded ui config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed to load ui config; using defaults");
      UiConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_config_is_valid() {
    let config =
      UiConfig::from_toml_str(UI_CONFIG_TOML)
        .expect("bundled config parses");
    assert_eq!(config, UiConfig::default());
  }
}
