use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ValidationError {
  #[error("Please enter a task description")]
  EmptyDescription
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse ui config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error(
    "endpoint `{name}` must contain exactly one {{id}} placeholder, got `{template}`"
  )]
  InvalidEndpoint {
    name:     &'static str,
    template: String
  },
  #[error("duration `{name}` must be greater than zero")]
  InvalidDuration { name: &'static str }
}
