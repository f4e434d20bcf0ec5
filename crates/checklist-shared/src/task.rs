use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer
};

pub const DEFAULT_CATEGORY: &str =
  "General";
pub const DEFAULT_PRIORITY: &str =
  "Medium";

/// Identifier of a task as the server hands it out. The page carries it in
/// `data-task-id` attributes and the detail endpoint returns it as a JSON
/// number, so both forms are accepted and kept as text.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub struct TaskId(String);

impl TaskId {
  /// Reads an identifier from a DOM attribute value. Blank values carry no id.
  pub fn from_attr(
    raw: Option<&str>
  ) -> Option<Self> {
    let value = raw?.trim();
    if value.is_empty() {
      None
    } else {
      Some(Self(value.to_string()))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<u64> for TaskId {
  fn from(value: u64) -> Self {
    Self(value.to_string())
  }
}

impl From<&str> for TaskId {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl Serialize for TaskId {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for TaskId {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
      Number(u64),
      Signed(i64),
      Text(String)
    }

    Ok(match RawId::deserialize(
      deserializer
    )? {
      | RawId::Number(n) => {
        Self(n.to_string())
      }
      | RawId::Signed(n) => {
        Self(n.to_string())
      }
      | RawId::Text(text) => Self(text)
    })
  }
}

/// Task detail as returned by `GET /task/{id}`.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
pub struct TaskView {
  pub id:        TaskId,
  #[serde(
    default,
    deserialize_with = "null_as_default"
  )]
  pub task:      String,
  #[serde(default)]
  pub category:  Option<String>,
  #[serde(default)]
  pub priority:  Option<String>,
  #[serde(
    default,
    rename = "dueDate"
  )]
  pub due_date:  Option<String>,
  #[serde(
    default,
    deserialize_with = "null_as_default"
  )]
  pub completed: bool
}

/// Empty sheet cells come back as `null`; read them like a missing key.
fn null_as_default<'de, D, T>(
  deserializer: D
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default
{
  Ok(
    Option::<T>::deserialize(deserializer)?
      .unwrap_or_default()
  )
}

impl TaskView {
  pub fn category(&self) -> &str {
    non_blank(self.category.as_deref())
      .unwrap_or(DEFAULT_CATEGORY)
  }

  pub fn priority(&self) -> &str {
    non_blank(self.priority.as_deref())
      .unwrap_or(DEFAULT_PRIORITY)
  }

  /// Value for an `<input type="date">`: the calendar part of an ISO date
  /// or datetime, or empty when absent or unreadable.
  pub fn due_date_input(&self) -> String {
    non_blank(self.due_date.as_deref())
      .and_then(parse_iso_day)
      .map(|day| {
        day.format("%Y-%m-%d").to_string()
      })
      .unwrap_or_default()
  }
}

fn non_blank(
  value: Option<&str>
) -> Option<&str> {
  value
    .map(str::trim)
    .filter(|value| !value.is_empty())
}

fn parse_iso_day(
  raw: &str
) -> Option<NaiveDate> {
  let day = raw.get(..10).unwrap_or(raw);
  NaiveDate::parse_from_str(
    day, "%Y-%m-%d"
  )
  .ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_accepts_numbers_and_strings() {
    let from_number: TaskId =
      serde_json::from_str("42")
        .expect("number id");
    let from_text: TaskId =
      serde_json::from_str("\"a7\"")
        .expect("text id");
    assert_eq!(from_number.as_str(), "42");
    assert_eq!(from_text.as_str(), "a7");
  }

  #[test]
  fn id_from_attr_ignores_blank() {
    assert_eq!(TaskId::from_attr(None), None);
    assert_eq!(
      TaskId::from_attr(Some("   ")),
      None
    );
    assert_eq!(
      TaskId::from_attr(Some(" 7 ")),
      Some(TaskId::from(7))
    );
  }

  #[test]
  fn absent_fields_get_display_defaults() {
    let view: TaskView =
      serde_json::from_str(
        r#"{"id":3,"task":"Call","category":null,"priority":"  "}"#
      )
      .expect("decode");
    assert_eq!(view.category(), "General");
    assert_eq!(view.priority(), "Medium");
    assert_eq!(view.due_date_input(), "");
    assert!(!view.completed);
  }

  #[test]
  fn null_text_and_flag_read_as_empty() {
    let view: TaskView = serde_json::from_str(
      r#"{"id":7,"task":null,"category":null,"priority":null,"dueDate":null,"completed":null}"#
    )
    .expect("decode nulls");
    assert_eq!(view.task, "");
    assert!(!view.completed);
    assert_eq!(view.category(), "General");
    assert_eq!(view.priority(), "Medium");
    assert_eq!(view.due_date_input(), "");
  }

  #[test]
  fn wrong_type_still_fails() {
    assert!(
      serde_json::from_str::<TaskView>(
        r#"{"id":7,"task":"x","completed":"yes"}"#
      )
      .is_err()
    );
  }

  #[test]
  fn due_date_takes_calendar_part() {
    let mut view: TaskView =
      serde_json::from_str(
        r#"{"id":1,"task":"x","dueDate":"2024-05-01T09:30:00"}"#
      )
      .expect("decode");
    assert_eq!(
      view.due_date_input(),
      "2024-05-01"
    );

    view.due_date =
      Some("next tuesday".to_string());
    assert_eq!(view.due_date_input(), "");
  }
}
