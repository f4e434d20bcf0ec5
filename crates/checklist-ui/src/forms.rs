use std::cell::Cell;
use std::rc::Rc;

use checklist_shared::{
  FormKind,
  SubmitDecision,
  decide_submit
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element,
  HtmlButtonElement,
  HtmlFormElement
};

use crate::dom::{
  by_id,
  js_error,
  query,
  ui_debug
};
use crate::notify::Notifier;

const DESCRIPTION_SELECTOR: &str =
  "[name=\"task\"]";
const SUBMIT_SELECTOR: &str =
  "button[type=\"submit\"]";

/// Intercepts the native submit of `kind`'s form: validates the description,
/// holds a busy button for `delay_ms`, then submits without re-entering the
/// handler.
pub fn bind_submit(
  document: &Document,
  kind: FormKind,
  delay_ms: u32,
  notifier: Notifier
) -> Option<EventListener> {
  let Some(form) = by_id::<HtmlFormElement>(
    document,
    kind.form_id()
  ) else {
    tracing::warn!(
      form = kind.form_id(),
      "form missing; submit binding skipped"
    );
    return None;
  };

  let busy = Rc::new(Cell::new(false));
  let target = form.clone();
  let options =
    EventListenerOptions::enable_prevent_default();

  Some(EventListener::new_with_options(
    &target,
    "submit",
    options,
    move |event| {
      event.prevent_default();

      let description =
        description_value(&form);
      match decide_submit(
        busy.get(),
        &description
      ) {
        | SubmitDecision::Ignore => {
          ui_debug(
            "form.submit.skip",
            &format!(
              "{} ignored duplicate while busy",
              kind.as_key()
            )
          );
        }
        | SubmitDecision::Reject(error) => {
          tracing::error!(
            form = kind.as_key(),
            %error,
            "submission blocked"
          );
          notifier.error(&error.to_string());
        }
        | SubmitDecision::Proceed => {
          busy.set(true);
          let button = submit_button(&form);
          let restore = button.as_ref().map(
            |button| {
              let label = button.inner_html();
              button.set_disabled(true);
              button.set_inner_html(
                kind.busy_label()
              );
              label
            }
          );
          ui_debug(
            "form.submit",
            &format!(
              "{} delaying native submit {delay_ms}ms",
              kind.as_key()
            )
          );

          let form = form.clone();
          let busy = Rc::clone(&busy);
          Timeout::new(delay_ms, move || {
            if let Err(error) = form.submit() {
              tracing::error!(
                form = kind.as_key(),
                error = %js_error(error),
                "native submit failed"
              );
              notifier.error(
                "Could not submit the form"
              );
              if let (Some(button), Some(label)) =
                (button, restore)
              {
                button.set_disabled(false);
                button.set_inner_html(&label);
              }
              busy.set(false);
            }
          })
          .forget();
        }
      }
    }
  ))
}

fn description_value(
  form: &HtmlFormElement
) -> String {
  query::<Element>(
    form,
    DESCRIPTION_SELECTOR
  )
  .and_then(|field| {
    js_sys::Reflect::get(
      &field,
      &JsValue::from_str("value")
    )
    .ok()
  })
  .and_then(|value| value.as_string())
  .unwrap_or_default()
}

fn submit_button(
  form: &HtmlFormElement
) -> Option<HtmlButtonElement> {
  query::<HtmlButtonElement>(
    form,
    SUBMIT_SELECTOR
  )
}
