use serde::{
  Deserialize,
  Serialize
};

use crate::error::ConfigError;
use crate::task::TaskId;

pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Endpoints {
  pub task_detail: String,
  pub toggle:      String,
  pub update:      String
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      task_detail: "/task/{id}"
        .to_string(),
      toggle:      "/toggle/{id}"
        .to_string(),
      update:      "/update/{id}"
        .to_string()
    }
  }
}

impl Endpoints {
  pub fn validate(
    &self
  ) -> Result<(), ConfigError> {
    for (name, template) in [
      ("task_detail", &self.task_detail),
      ("toggle", &self.toggle),
      ("update", &self.update)
    ] {
      if template
        .matches(ID_PLACEHOLDER)
        .count()
        != 1
      {
        return Err(
          ConfigError::InvalidEndpoint {
            name,
            template: template.clone()
          }
        );
      }
    }
    Ok(())
  }

  pub fn task_detail_url(
    &self,
    id: &TaskId
  ) -> String {
    fill(&self.task_detail, id)
  }

  pub fn toggle_url(
    &self,
    id: &TaskId
  ) -> String {
    fill(&self.toggle, id)
  }

  pub fn update_url(
    &self,
    id: &TaskId
  ) -> String {
    fill(&self.update, id)
  }
}

fn fill(
  template: &str,
  id: &TaskId
) -> String {
  template
    .replace(ID_PLACEHOLDER, id.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_server_routes() {
    let endpoints = Endpoints::default();
    let id = TaskId::from(42);
    assert_eq!(
      endpoints.task_detail_url(&id),
      "/task/42"
    );
    assert_eq!(
      endpoints.toggle_url(&id),
      "/toggle/42"
    );
    assert_eq!(
      endpoints.update_url(&id),
      "/update/42"
    );
    assert!(endpoints.validate().is_ok());
  }

  #[test]
  fn template_needs_single_placeholder() {
    let endpoints = Endpoints {
      toggle: "/toggle".to_string(),
      ..Endpoints::default()
    };
    match endpoints.validate() {
      | Err(
        ConfigError::InvalidEndpoint {
          name,
          ..
        }
      ) => assert_eq!(name, "toggle"),
      | other => {
        panic!("unexpected {other:?}")
      }
    }
  }
}
