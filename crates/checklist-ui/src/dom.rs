use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  Element,
  HtmlElement
};

pub fn document() -> Result<Document, String> {
  web_sys::window()
    .and_then(|window| window.document())
    .ok_or_else(|| {
      "no document on window".to_string()
    })
}

pub fn js_error(error: JsValue) -> String {
  error
    .as_string()
    .unwrap_or_else(|| format!("{error:?}"))
}

/// Looks up `#id` and casts it, returning `None` when it is absent or of a
/// different element type.
pub fn by_id<T>(
  document: &Document,
  id: &str
) -> Option<T>
where
  T: JsCast
{
  document
    .get_element_by_id(id)
    .and_then(|element| {
      element.dyn_into::<T>().ok()
    })
}

pub fn query<T>(
  root: &Element,
  selector: &str
) -> Option<T>
where
  T: JsCast
{
  root
    .query_selector(selector)
    .ok()
    .flatten()
    .and_then(|element| {
      element.dyn_into::<T>().ok()
    })
}

pub fn query_all(
  document: &Document,
  selector: &str
) -> Vec<Element> {
  let Ok(list) =
    document.query_selector_all(selector)
  else {
    tracing::error!(
      selector,
      "invalid selector"
    );
    return vec![];
  };

  (0..list.length())
    .filter_map(|index| list.item(index))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .collect()
}

/// Nearest ancestor-or-self of an event target matching `selector`.
pub fn closest_from_target(
  target: Option<web_sys::EventTarget>,
  selector: &str
) -> Option<Element> {
  target?
    .dyn_into::<Element>()
    .ok()?
    .closest(selector)
    .ok()
    .flatten()
}

pub fn set_style(
  element: &HtmlElement,
  property: &str,
  value: &str
) {
  if let Err(error) = element
    .style()
    .set_property(property, value)
  {
    tracing::error!(
      property,
      error = %js_error(error),
      "failed setting style"
    );
  }
}

pub fn set_class(
  element: &Element,
  class: &str,
  on: bool
) {
  let classes = element.class_list();
  let result = if on {
    classes.add_1(class)
  } else {
    classes.remove_1(class)
  };
  if let Err(error) = result {
    tracing::error!(
      class,
      error = %js_error(error),
      "failed updating class list"
    );
  }
}

pub fn ui_debug(event: &str, detail: &str) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  gloo::console::log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

