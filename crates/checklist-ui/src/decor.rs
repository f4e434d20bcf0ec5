use checklist_shared::decor::{
  ENTRANCE_MS,
  entrance_delay_ms,
  min_date_value
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlElement,
  HtmlInputElement
};

use crate::dom::{
  query_all,
  set_style
};
use crate::toggle::ROW_SELECTOR;

/// Fades the server-rendered rows in one after another.
pub fn stagger_rows(
  document: &Document,
  stagger_ms: u32
) {
  let rows: Vec<HtmlElement> =
    query_all(document, ROW_SELECTOR)
      .into_iter()
      .filter_map(|row| {
        row.dyn_into::<HtmlElement>().ok()
      })
      .collect();

  for (index, row) in rows.into_iter().enumerate() {
    set_style(&row, "opacity", "0");
    set_style(
      &row,
      "transform",
      "translateY(20px)"
    );
    set_style(
      &row,
      "transition",
      &format!(
        "opacity {ENTRANCE_MS}ms ease, transform {ENTRANCE_MS}ms ease"
      )
    );

    Timeout::new(
      entrance_delay_ms(index, stagger_ms),
      move || {
        set_style(&row, "opacity", "1");
        set_style(
          &row,
          "transform",
          "translateY(0)"
        );
      }
    )
    .forget();
  }
}

/// Keeps date pickers from offering days that already passed.
pub fn limit_date_inputs(
  document: &Document
) {
  let today = min_date_value(
    chrono::Local::now().date_naive()
  );
  for input in query_all(
    document,
    "input[type=\"date\"]"
  )
  .into_iter()
  .filter_map(|input| {
    input.dyn_into::<HtmlInputElement>().ok()
  }) {
    input.set_min(&today);
  }
}
