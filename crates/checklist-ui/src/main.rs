mod api;
mod config;
mod controller;
mod decor;
mod dom;
mod edit;
mod forms;
mod modal;
mod notify;
mod stats;
mod toggle;

use std::cell::RefCell;

use gloo::events::EventListener;

use crate::controller::Controller;

thread_local! {
  static CONTROLLER: RefCell<Option<Controller>> =
    const { RefCell::new(None) };
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting checklist page controller"
  );

  let document = match dom::document() {
    | Ok(document) => document,
    | Err(err) => {
      tracing::error!(error = %err, "cannot start without a document");
      return;
    }
  };

  if is_loading(&document.ready_state()) {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| mount()
    )
    .forget();
  } else {
    mount();
  }
}

fn mount() {
  let document = match dom::document() {
    | Ok(document) => document,
    | Err(err) => {
      tracing::error!(error = %err, "document vanished before mount");
      return;
    }
  };
  let config = config::load_ui_config();
  let controller =
    Controller::mount(&document, config);
  CONTROLLER.with(|slot| {
    slot.replace(Some(controller));
  });
}

fn is_loading(ready_state: &str) -> bool {
  ready_state == "loading"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn waits_only_while_document_is_loading() {
    assert!(is_loading("loading"));
    assert!(!is_loading("interactive"));
    assert!(!is_loading("complete"));
  }
}
