use std::rc::Rc;

use checklist_shared::modal::MODAL_ID;
use checklist_shared::{
  FormKind,
  UiConfig
};
use gloo::events::EventListener;
use web_sys::Document;

use crate::decor;
use crate::edit;
use crate::forms;
use crate::modal::EditModal;
use crate::notify::Notifier;
use crate::stats;
use crate::toggle;

/// Page-lifetime owner of every listener the controller installs. Dropping
/// it unbinds them.
pub struct Controller {
  _listeners: Vec<EventListener>
}

impl Controller {
  #[tracing::instrument(skip_all)]
  pub fn mount(
    document: &Document,
    config: UiConfig
  ) -> Self {
    let config = Rc::new(config);
    let notifier = Notifier::new(&config);
    let mut listeners = Vec::new();

    for kind in [FormKind::Add, FormKind::Edit] {
      listeners.extend(forms::bind_submit(
        document,
        kind,
        config.submit_delay_ms,
        notifier
      ));
    }

    match EditModal::find(document) {
      | Some(modal) => {
        listeners.extend(modal.bind());
        listeners.push(edit::bind_edit_clicks(
          document,
          modal,
          Rc::clone(&config),
          notifier
        ));
      }
      | None => {
        tracing::warn!(
          id = MODAL_ID,
          "edit modal missing; edit buttons left unbound"
        );
      }
    }

    listeners.push(toggle::bind_toggles(
      document,
      Rc::clone(&config),
      notifier
    ));

    let counts = stats::refresh(document);
    decor::stagger_rows(
      document,
      config.stagger_ms
    );
    decor::limit_date_inputs(document);

    tracing::info!(
      listeners = listeners.len(),
      tasks = counts.total,
      "checklist controller mounted"
    );
    Self {
      _listeners: listeners
    }
  }
}
