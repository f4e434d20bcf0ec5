/// Row counts shown in the stat cards. Always derived from the rows on the
/// page, never stored between recomputations.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskStats {
  pub total:     usize,
  pub completed: usize,
  pub pending:   usize
}

impl TaskStats {
  pub fn from_completion<I>(
    rows: I
  ) -> Self
  where
    I: IntoIterator<Item = bool>
  {
    let (total, completed) = rows
      .into_iter()
      .fold((0, 0), |(total, done), row| {
        (total + 1, done + usize::from(row))
      });
    Self {
      total,
      completed,
      pending: total - completed
    }
  }
}
