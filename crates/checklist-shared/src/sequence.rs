/// Hands out tickets for edit-detail requests so only the newest request of
/// the current modal session may touch the form.
#[derive(Debug, Default)]
pub struct RequestSequence {
  latest: u64
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct RequestTicket(u64);

impl RequestTicket {
  pub fn value(self) -> u64 {
    self.0
  }
}

impl RequestSequence {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn begin(&mut self) -> RequestTicket {
    self.latest =
      self.latest.wrapping_add(1);
    RequestTicket(self.latest)
  }

  /// Retires whatever request is outstanding. Called when the modal closes.
  pub fn invalidate(&mut self) {
    self.latest =
      self.latest.wrapping_add(1);
  }

  pub fn is_current(
    &self,
    ticket: RequestTicket
  ) -> bool {
    ticket.0 == self.latest
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn newer_request_supersedes_older() {
    let mut seq = RequestSequence::new();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
  }

  #[test]
  fn invalidate_retires_outstanding() {
    let mut seq = RequestSequence::new();
    let ticket = seq.begin();
    seq.invalidate();
    assert!(!seq.is_current(ticket));
    let next = seq.begin();
    assert!(seq.is_current(next));
    assert_ne!(ticket, next);
  }
}
