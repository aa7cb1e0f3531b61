// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn a raw commit timestamp into the normalized outcome (relative phrase + whole-day age); map fetch failures to phrases
// role: normalize/outcome
// inputs: ISO-ish timestamp strings from provider payloads; "now"; FetchError
// outputs: ProviderOutcome
// invariants:
// - days is truncated toward zero, never rounded
// - phrase is monotonic in elapsed time; future instants render as "now"
// - every failure phrase is prefixed with the provider name and carries days == None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::fetch::FetchError;
use crate::model::ProviderOutcome;

/// Parse the timestamp shapes provider APIs emit.
///
/// RFC 3339 with an offset is the common case; offset-less date-times and bare
/// dates are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Some(dt.with_timezone(&Utc));
  }

  for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
      return Some(naive.and_utc());
    }
  }

  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}

/// Whole days elapsed from `then` to `now`, truncated toward zero.
pub fn elapsed_days(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  now.signed_duration_since(then).num_days()
}

const DAYS_PER_YEAR: i64 = 365;

/// Relative phrase for `then`; from 365 days on, years are counted in whole
/// 365-day steps so the phrase turns over on the same day as the color bands.
pub fn relative_phrase(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let elapsed = now.signed_duration_since(then);
  let formatter = timeago::Formatter::new();

  let days = elapsed.num_days();
  if days >= DAYS_PER_YEAR {
    // 366-day years stay inside timeago's year bucket for any realistic count
    let years = (days / DAYS_PER_YEAR) as u64;
    return formatter.convert(std::time::Duration::from_secs(years * 366 * 86_400));
  }

  formatter.convert(elapsed.to_std().unwrap_or_default())
}

/// Build the outcome for a resolved commit timestamp.
pub fn outcome_for_timestamp(provider: &str, raw: &str, now: DateTime<Utc>) -> ProviderOutcome {
  match parse_timestamp(raw) {
    Some(then) => ProviderOutcome::resolved(relative_phrase(then, now), elapsed_days(then, now)),
    None => {
      tracing::warn!(provider, timestamp = raw, "unparsable commit timestamp");
      ProviderOutcome::failed(format!("{}: invalid commit data", provider))
    }
  }
}

/// Map an upstream failure onto the shared status table.
pub fn outcome_for_fetch_error(provider: &str, err: &FetchError) -> ProviderOutcome {
  tracing::warn!(provider, error = %err, "upstream fetch failed");

  let phrase = match err.status() {
    Some(404) => "repo not found",
    Some(401) | Some(403) => "unauthorized",
    Some(429) => "rate limited",
    _ => "error",
  };

  ProviderOutcome::failed(format!("{}: {}", provider, phrase))
}
