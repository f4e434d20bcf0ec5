use checklist_shared::TaskStats;
use checklist_shared::toggle::COMPLETED_CLASS;
use web_sys::Document;

use crate::dom::query_all;
use crate::toggle::ROW_SELECTOR;

/// Recounts task rows and writes the totals into the stat cards.
pub fn refresh(document: &Document) -> TaskStats {
  let stats = TaskStats::from_completion(
    query_all(document, ROW_SELECTOR)
      .iter()
      .map(|row| {
        row
          .class_list()
          .contains(COMPLETED_CLASS)
      })
  );

  for (selector, value) in [
    (".stat-total .stat-number", stats.total),
    (
      ".stat-completed .stat-number",
      stats.completed
    ),
    (".stat-pending .stat-number", stats.pending)
  ] {
    for element in
      query_all(document, selector)
    {
      element.set_text_content(Some(
        &value.to_string()
      ));
    }
  }

  tracing::debug!(
    total = stats.total,
    completed = stats.completed,
    pending = stats.pending,
    "stats refreshed"
  );
  stats
}
