//! View model and interaction rules for the checklist page controller.
//!
//! Nothing in here touches the browser. The wasm crate reads values out of
//! the document, asks this crate what to do, and writes the answer back.

pub mod config;
pub mod decor;
pub mod edit_form;
pub mod error;
pub mod form;
pub mod modal;
pub mod notification;
pub mod routes;
pub mod sequence;
pub mod stats;
pub mod task;
pub mod toggle;
pub mod validate;

pub use config::UiConfig;
pub use edit_form::EditFormPlan;
pub use error::{
  ConfigError,
  ValidationError
};
pub use form::{
  FormKind,
  SubmitDecision,
  decide_submit
};
pub use modal::{
  CloseTrigger,
  ModalState
};
pub use notification::{
  NotificationKind,
  NotificationLifecycle,
  NotificationPhase,
  NotificationSchedule
};
pub use routes::Endpoints;
pub use sequence::{
  RequestSequence,
  RequestTicket
};
pub use stats::TaskStats;
pub use task::{
  TaskId,
  TaskView
};
pub use toggle::{
  RowVisual,
  ToggleOutcome
};
pub use validate::validate_description;
