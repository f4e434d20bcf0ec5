use chrono::NaiveDate;

pub const ENTRANCE_MS: u32 = 400;

/// Delay before row `index` starts its entrance animation.
pub fn entrance_delay_ms(
  index: usize,
  stagger_ms: u32
) -> u32 {
  u32::try_from(index)
    .unwrap_or(u32::MAX)
    .saturating_mul(stagger_ms)
}

/// `min` attribute for date inputs so past days cannot be picked.
pub fn min_date_value(
  today: NaiveDate
) -> String {
  today.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rows_are_staggered() {
    assert_eq!(entrance_delay_ms(0, 100), 0);
    assert_eq!(entrance_delay_ms(3, 50), 150);
  }

  #[test]
  fn min_date_is_iso_day() {
    let day =
      NaiveDate::from_ymd_opt(2024, 5, 1)
        .expect("valid day");
    assert_eq!(min_date_value(day), "2024-05-01");
  }
}
