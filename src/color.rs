/// Ascending upper bounds (exclusive) and the color each band maps to.
const BANDS: [(i64, &str); 5] = [
  (7, "brightgreen"),
  (30, "green"),
  (180, "yellowgreen"),
  (365, "yellow"),
  (730, "orange"),
];

const STALE: &str = "red";

/// Color for a commit that is `days` old. Negative ages count as fresh.
pub fn classify(days: i64) -> &'static str {
  BANDS
    .iter()
    .find(|(limit, _)| days < *limit)
    .map(|(_, color)| *color)
    .unwrap_or(STALE)
}
