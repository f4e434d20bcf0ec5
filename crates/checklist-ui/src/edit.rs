use std::rc::Rc;

use checklist_shared::{
  CloseTrigger,
  EditFormPlan,
  TaskId,
  TaskView,
  UiConfig
};
use gloo::events::EventListener;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  Element,
  HtmlFormElement,
  HtmlOptionElement,
  HtmlSelectElement
};

use crate::api;
use crate::dom::{
  by_id,
  closest_from_target,
  js_error,
  ui_debug
};
use crate::modal::EditModal;
use crate::notify::Notifier;

const EDIT_BUTTON_SELECTOR: &str =
  ".edit-btn";
const TASK_ID_ATTR: &str = "data-task-id";

const FORM_ID: &str = "editTaskForm";
const TASK_ID_FIELD: &str = "editTaskId";
const DESCRIPTION_FIELD: &str = "editTask";
const CATEGORY_FIELD: &str = "editCategory";
const PRIORITY_FIELD: &str = "editPriority";
const DUE_DATE_FIELD: &str = "editDueDate";
const COMPLETED_FIELD: &str =
  "editCompleted";

/// Delegated click handler for every `.edit-btn` on the page.
pub fn bind_edit_clicks(
  document: &Document,
  modal: Rc<EditModal>,
  config: Rc<UiConfig>,
  notifier: Notifier
) -> EventListener {
  let page = document.clone();
  EventListener::new(
    document,
    "click",
    move |event| {
      let Some(button) = closest_from_target(
        event.target(),
        EDIT_BUTTON_SELECTOR
      ) else {
        return;
      };
      let Some(id) = TaskId::from_attr(
        button
          .get_attribute(TASK_ID_ATTR)
          .as_deref()
      ) else {
        tracing::warn!(
          "edit button without task id"
        );
        return;
      };

      open_for(
        page.clone(),
        Rc::clone(&modal),
        Rc::clone(&config),
        notifier,
        id
      );
    }
  )
}

fn open_for(
  document: Document,
  modal: Rc<EditModal>,
  config: Rc<UiConfig>,
  notifier: Notifier,
  id: TaskId
) {
  modal.open();
  modal.show_loading();
  let ticket = modal.begin_request();
  ui_debug(
    "edit.fetch.begin",
    &format!(
      "task={id} ticket={}",
      ticket.value()
    )
  );

  wasm_bindgen_futures::spawn_local(
    async move {
      let result = api::fetch_task(
        &config.endpoints,
        &id
      )
      .await;

      if !modal.is_current(ticket) {
        tracing::debug!(
          task_id = %id,
          ticket = ticket.value(),
          modal_open = modal.is_open(),
          "discarding stale task detail response"
        );
        return;
      }
      modal.hide_loading();

      match result {
        | Ok(task) => {
          if let Err(err) = populate(
            &document, &task, &config
          ) {
            tracing::error!(task_id = %id, error = %err, "failed to populate edit form");
            notifier.error(
              "Failed to load task details"
            );
            modal.close(
              CloseTrigger::LoadFailed
            );
            return;
          }
          tracing::info!(
            task_id = %id,
            "edit form populated"
          );
        }
        | Err(err) => {
          tracing::error!(task_id = %id, error = %err, "task detail fetch failed");
          notifier.error(
            "Failed to load task details"
          );
          modal.close(
            CloseTrigger::LoadFailed
          );
        }
      }
    }
  );
}

fn populate(
  document: &Document,
  task: &TaskView,
  config: &UiConfig
) -> Result<(), String> {
  let category = by_id::<HtmlSelectElement>(
    document,
    CATEGORY_FIELD
  )
  .ok_or("missing category select")?;
  let presets = option_values(&category);
  let plan = EditFormPlan::from_task(
    task,
    &presets[..],
    &config.endpoints
  );

  set_value(
    document,
    TASK_ID_FIELD,
    plan.task_id.as_str()
  )?;
  set_value(
    document,
    DESCRIPTION_FIELD,
    &plan.description
  )?;

  if plan.add_category_option {
    let option =
      HtmlOptionElement::new_with_text_and_value(
        &plan.category,
        &plan.category
      )
      .map_err(js_error)?;
    category
      .append_child(&option)
      .map_err(js_error)?;
    ui_debug(
      "edit.category.added",
      &plan.category
    );
  }
  category.set_value(&plan.category);

  set_value(
    document,
    PRIORITY_FIELD,
    &plan.priority
  )?;
  set_value(
    document,
    DUE_DATE_FIELD,
    &plan.due_date
  )?;

  if let Err(err) = set_value(
    document,
    COMPLETED_FIELD,
    plan.completed_value()
  ) {
    tracing::warn!(
      task_id = %plan.task_id,
      error = %err,
      "completed field not written"
    );
  }

  by_id::<HtmlFormElement>(document, FORM_ID)
    .ok_or("missing edit form")?
    .set_action(&plan.action);
  Ok(())
}

/// Writes `value` on an input, select or textarea by id.
fn set_value(
  document: &Document,
  id: &str,
  value: &str
) -> Result<(), String> {
  let field = by_id::<Element>(document, id)
    .ok_or_else(|| {
      format!("missing field #{id}")
    })?;
  js_sys::Reflect::set(
    &field,
    &JsValue::from_str("value"),
    &JsValue::from_str(value)
  )
  .map_err(js_error)?;
  Ok(())
}

fn option_values(
  select: &HtmlSelectElement
) -> Vec<String> {
  let Ok(options) =
    select.query_selector_all("option")
  else {
    return vec![];
  };
  (0..options.length())
    .filter_map(|index| options.item(index))
    .filter_map(|node| {
      node
        .dyn_into::<HtmlOptionElement>()
        .ok()
    })
    .map(|option| option.value())
    .collect()
}
