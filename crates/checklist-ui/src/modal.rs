use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use checklist_shared::modal::{
  ACTIVE_CLASS,
  CANCEL_BUTTON_ID,
  CLOSE_BUTTON_SELECTOR,
  DIALOG_SELECTOR,
  LOADING_ID,
  LOADING_STYLES,
  MODAL_ID
};
use checklist_shared::{
  CloseTrigger,
  ModalState,
  RequestSequence,
  RequestTicket
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  KeyboardEvent
};

use crate::dom::{
  by_id,
  js_error,
  query,
  set_class,
  set_style,
  ui_debug
};


/// The edit dialog. Owns the open/closed flag and the ticket counter for
/// detail fetches, so closing it also retires any request still in flight.
pub struct EditModal {
  document: Document,
  overlay:  Element,
  state:    Cell<ModalState>,
  sequence: RefCell<RequestSequence>
}

impl EditModal {
  pub fn find(
    document: &Document
  ) -> Option<Rc<Self>> {
    let overlay =
      by_id::<Element>(document, MODAL_ID)?;
    Some(Rc::new(Self {
      document: document.clone(),
      overlay,
      state: Cell::new(ModalState::Closed),
      sequence: RefCell::new(
        RequestSequence::new()
      )
    }))
  }

  pub fn is_open(&self) -> bool {
    self.state.get().is_open()
  }

  pub fn open(&self) {
    self.apply(self.state.get().open());
    ui_debug("modal.open", MODAL_ID);
  }

  pub fn close(&self, trigger: CloseTrigger) {
    self.apply(
      self.state.get().close(trigger)
    );
    self.sequence.borrow_mut().invalidate();
    self.hide_loading();
    ui_debug("modal.close", trigger.as_key());
  }

  /// Starts a new detail request for this modal session.
  pub fn begin_request(&self) -> RequestTicket {
    self.sequence.borrow_mut().begin()
  }

  pub fn is_current(
    &self,
    ticket: RequestTicket
  ) -> bool {
    self.sequence.borrow().is_current(ticket)
  }

  fn apply(&self, next: ModalState) {
    self.state.set(next);
    set_class(
      &self.overlay,
      ACTIVE_CLASS,
      next.is_open()
    );
    if let Some(body) = self.document.body() {
      set_style(
        &body,
        "overflow",
        next.body_overflow()
      );
    }
  }

  pub fn show_loading(&self) {
    if self
      .document
      .get_element_by_id(LOADING_ID)
      .is_some()
    {
      return;
    }

    let host = query::<Element>(
      &self.overlay,
      DIALOG_SELECTOR
    )
    .unwrap_or_else(|| self.overlay.clone());

    let result = self
      .document
      .create_element("div")
      .and_then(|loading| {
        loading.set_id(LOADING_ID);
        loading.set_inner_html(
          "<div class=\"text-center\"><i class=\"fas fa-spinner fa-spin text-3xl text-ginger-base mb-3\"></i><p class=\"text-ginger-deep font-semibold\">Loading task details...</p></div>"
        );
        if let Some(cover) =
          loading.dyn_ref::<HtmlElement>()
        {
          for (property, value) in LOADING_STYLES {
            set_style(cover, property, value);
          }
        }
        host.append_child(&loading)
      });
    if let Err(error) = result {
      tracing::error!(
        error = %js_error(error),
        "failed to show modal loading indicator"
      );
    }
  }

  pub fn hide_loading(&self) {
    if let Some(loading) = self
      .document
      .get_element_by_id(LOADING_ID)
    {
      loading.remove();
    }
  }

  /// Close button, cancel button, overlay click and Escape.
  pub fn bind(
    self: &Rc<Self>
  ) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let close_button = query::<Element>(
      &self.overlay,
      CLOSE_BUTTON_SELECTOR
    );
    let cancel_button = by_id::<Element>(
      &self.document,
      CANCEL_BUTTON_ID
    );
    for (name, button, trigger) in [
      (
        CLOSE_BUTTON_SELECTOR,
        close_button,
        CloseTrigger::CloseButton
      ),
      (
        CANCEL_BUTTON_ID,
        cancel_button,
        CloseTrigger::CancelButton
      )
    ] {
      match button {
        | Some(button) => {
          let modal = Rc::clone(self);
          listeners.push(EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
              event.prevent_default();
              modal.close(trigger);
            }
          ));
        }
        | None => {
          tracing::warn!(
            button = name,
            "modal button missing; binding skipped"
          );
        }
      }
    }

    {
      let modal = Rc::clone(self);
      listeners.push(EventListener::new(
        &self.overlay,
        "click",
        move |event| {
          let on_overlay = event
            .target()
            .and_then(|target| {
              target.dyn_into::<Element>().ok()
            })
            .is_some_and(|target| {
              target == modal.overlay
            });
          if let Some(trigger) = modal
            .state
            .get()
            .close_trigger_for_click(on_overlay)
          {
            modal.close(trigger);
          }
        }
      ));
    }

    {
      let modal = Rc::clone(self);
      listeners.push(EventListener::new(
        &self.document,
        "keydown",
        move |event| {
          let Some(event) =
            event.dyn_ref::<KeyboardEvent>()
          else {
            return;
          };
          if let Some(trigger) = modal
            .state
            .get()
            .close_trigger_for_key(&event.key())
          {
            modal.close(trigger);
          }
        }
      ));
    }

    listeners
  }
}
