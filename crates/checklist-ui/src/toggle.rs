use std::rc::Rc;

use checklist_shared::toggle::COMPLETED_CLASS;
use checklist_shared::{
  RowVisual,
  TaskId,
  ToggleOutcome,
  UiConfig
};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  HtmlInputElement
};

use crate::api;
use crate::dom::{
  query,
  set_class,
  set_style
};
use crate::notify::Notifier;
use crate::stats;

pub const ROW_SELECTOR: &str = ".task-item";
const CHECKBOX_SELECTOR: &str =
  ".completion-toggle input";
const TITLE_SELECTOR: &str = ".task-title";
const TASK_ID_ATTR: &str = "data-task-id";

pub fn bind_toggles(
  document: &Document,
  config: Rc<UiConfig>,
  notifier: Notifier
) -> EventListener {
  let page = document.clone();
  EventListener::new(
    document,
    "change",
    move |event| {
      let Some(checkbox) = event
        .target()
        .and_then(|target| {
          target
            .dyn_into::<HtmlInputElement>()
            .ok()
        })
        .filter(|input| {
          input
            .matches(CHECKBOX_SELECTOR)
            .unwrap_or(false)
        })
      else {
        return;
      };
      let Some(row) = checkbox
        .closest(ROW_SELECTOR)
        .ok()
        .flatten()
      else {
        tracing::warn!(
          "completion toggle outside a task row"
        );
        return;
      };
      let Some(id) = TaskId::from_attr(
        row
          .get_attribute(TASK_ID_ATTR)
          .as_deref()
      ) else {
        tracing::warn!(
          "task row without task id"
        );
        return;
      };

      toggle_row(
        page.clone(),
        Rc::clone(&config),
        notifier,
        checkbox,
        row,
        id
      );
    }
  )
}

fn toggle_row(
  document: Document,
  config: Rc<UiConfig>,
  notifier: Notifier,
  checkbox: HtmlInputElement,
  row: Element,
  id: TaskId
) {
  let checked = checkbox.checked();
  checkbox.set_disabled(true);

  wasm_bindgen_futures::spawn_local(
    async move {
      let result = api::toggle_task(
        &config.endpoints,
        &id
      )
      .await;
      checkbox.set_disabled(false);

      if let Err(err) = &result {
        tracing::error!(task_id = %id, error = %err, "toggle request failed");
      }

      let outcome = ToggleOutcome::resolve(
        checked,
        result.is_ok()
      );
      match &outcome {
        | ToggleOutcome::Applied {
          row: visual,
          ..
        } => {
          apply_row_visual(&row, *visual);
          stats::refresh(&document);
          tracing::info!(
            task_id = %id,
            completed = visual.completed,
            "task toggled"
          );
        }
        | ToggleOutcome::Reverted {
          checked,
          ..
        } => {
          checkbox.set_checked(*checked);
        }
      }

      let (kind, message) =
        outcome.notification();
      notifier.show(kind, message);
    }
  );
}

fn apply_row_visual(
  row: &Element,
  visual: RowVisual
) {
  set_class(
    row,
    COMPLETED_CLASS,
    visual.completed
  );
  if let Some(title) = query::<HtmlElement>(
    row,
    TITLE_SELECTOR
  ) {
    set_style(
      &title,
      "text-decoration",
      visual.title_decoration()
    );
  }
}
