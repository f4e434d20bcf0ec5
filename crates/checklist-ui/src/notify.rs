use std::cell::RefCell;
use std::rc::Rc;

use checklist_shared::notification::{
  BASE_CLASS,
  stack_offset_px
};
use checklist_shared::{
  NotificationKind,
  NotificationLifecycle,
  NotificationSchedule,
  UiConfig
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlElement
};

use crate::dom::{
  document,
  js_error,
  query_all,
  set_class,
  set_style
};

const LEAVING_CLASS: &str =
  "notification-leaving";
const HIDDEN_TRANSFORM: &str =
  "translateX(150%)";

/// Floating status banners. Cheap to clone; every banner it shows owns its
/// element, close listener and timers.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
  schedule: NotificationSchedule
}

struct Banner {
  element:   HtmlElement,
  lifecycle: RefCell<NotificationLifecycle>,
  close:     RefCell<Option<EventListener>>,
  schedule:  NotificationSchedule
}

impl Notifier {
  pub fn new(config: &UiConfig) -> Self {
    Self {
      schedule: config
        .notification_schedule()
    }
  }

  pub fn error(&self, message: &str) {
    self.show(
      NotificationKind::Error,
      message
    );
  }

  pub fn show(
    &self,
    kind: NotificationKind,
    message: &str
  ) {
    if let Err(err) =
      self.try_show(kind, message)
    {
      tracing::error!(
        kind = kind.as_key(),
        error = %err,
        "failed to show notification"
      );
    }
  }

  fn try_show(
    &self,
    kind: NotificationKind,
    message: &str
  ) -> Result<(), String> {
    let document = document()?;
    let body = document
      .body()
      .ok_or("document has no body")?;

    let showing = query_all(
      &document,
      &format!(
        ".{BASE_CLASS}:not(.{LEAVING_CLASS})"
      )
    )
    .len();

    let element = build_element(
      &document,
      kind,
      message,
      stack_offset_px(showing),
      self.schedule.remove_after_ms
    )?;
    body
      .append_child(&element)
      .map_err(js_error)?;

    let banner = Rc::new(Banner {
      element,
      lifecycle: RefCell::new(
        NotificationLifecycle::new()
      ),
      close: RefCell::new(None),
      schedule: self.schedule
    });

    if let Ok(Some(button)) = banner
      .element
      .query_selector(".notification-close")
    {
      let target = Rc::clone(&banner);
      let listener = EventListener::new(
        &button,
        "click",
        move |_| target.dismiss()
      );
      banner.close.replace(Some(listener));
    }

    {
      let element = banner.element.clone();
      Timeout::new(
        self.schedule.enter_after_ms,
        move || {
          set_style(
            &element,
            "transform",
            "translateX(0)"
          );
        }
      )
      .forget();
    }

    {
      let banner = Rc::clone(&banner);
      Timeout::new(
        self.schedule.dismiss_at_ms,
        move || banner.dismiss()
      )
      .forget();
    }

    tracing::info!(
      kind = kind.as_key(),
      text = message,
      "notification shown"
    );
    Ok(())
  }
}

impl Banner {
  fn dismiss(self: &Rc<Self>) {
    if !self
      .lifecycle
      .borrow_mut()
      .begin_dismiss()
    {
      return;
    }

    set_class(
      &self.element,
      LEAVING_CLASS,
      true
    );
    set_style(
      &self.element,
      "transform",
      HIDDEN_TRANSFORM
    );
    set_style(&self.element, "opacity", "0");

    let banner = Rc::clone(self);
    Timeout::new(
      self.schedule.remove_after_ms,
      move || {
        if banner
          .lifecycle
          .borrow_mut()
          .finish()
        {
          banner.element.remove();
          // drops the close listener and with it the cycle back to `banner`
          banner.close.take();
        }
      }
    )
    .forget();
  }
}

fn build_element(
  document: &Document,
  kind: NotificationKind,
  message: &str,
  top_px: u32,
  exit_ms: u32
) -> Result<HtmlElement, String> {
  let element = document
    .create_element("div")
    .map_err(js_error)?
    .dyn_into::<HtmlElement>()
    .map_err(|_| {
      "div is not an HtmlElement".to_string()
    })?;
  element.set_class_name(&kind.css_class());
  element
    .set_attribute("role", "status")
    .map_err(js_error)?;

  for (property, value) in [
    ("position", "fixed".to_string()),
    ("top", format!("{top_px}px")),
    ("right", "20px".to_string()),
    ("z-index", "1001".to_string()),
    ("max-width", "400px".to_string()),
    ("min-width", "280px".to_string()),
    ("padding", "16px 20px".to_string()),
    (
      "background",
      kind.accent_color().to_string()
    ),
    ("color", "#ffffff".to_string()),
    ("border-radius", "8px".to_string()),
    (
      "box-shadow",
      "0 10px 25px rgba(0, 0, 0, 0.15)"
        .to_string()
    ),
    (
      "transform",
      HIDDEN_TRANSFORM.to_string()
    ),
    (
      "transition",
      format!(
        "transform {exit_ms}ms ease, opacity {exit_ms}ms ease"
      )
    )
  ] {
    set_style(&element, property, &value);
  }

  let content = document
    .create_element("div")
    .map_err(js_error)?;
  content.set_class_name(
    "notification-content"
  );

  let icon = document
    .create_element("i")
    .map_err(js_error)?;
  icon.set_class_name(kind.icon_class());
  icon
    .set_attribute(
      "style",
      "margin-right: 10px;"
    )
    .map_err(js_error)?;

  let text = document
    .create_element("span")
    .map_err(js_error)?;
  text.set_text_content(Some(message));

  let close = document
    .create_element("button")
    .map_err(js_error)?;
  close.set_class_name("notification-close");
  close
    .set_attribute("type", "button")
    .map_err(js_error)?;
  close
    .set_attribute("aria-label", "Dismiss")
    .map_err(js_error)?;
  close.set_text_content(Some("\u{00d7}"));

  content
    .append_child(&icon)
    .map_err(js_error)?;
  content
    .append_child(&text)
    .map_err(js_error)?;
  content
    .append_child(&close)
    .map_err(js_error)?;
  element
    .append_child(&content)
    .map_err(js_error)?;

  Ok(element)
}
