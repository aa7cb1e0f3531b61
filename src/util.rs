// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for numeric-token detection, URI component encoding, "now" resolution, and man page rendering
// role: utilities/helpers
// inputs: Various primitives; DateTime; clap CommandFactory
// outputs: Booleans, encoded/decoded strings, instants, man page text
// side_effects: None
// invariants:
// - is_numeric rejects empty and whitespace-only strings
// - encode_uri_component leaves A-Z a-z 0-9 - _ . ! ~ * ' ( ) untouched
// - decode_uri_component never fails; invalid UTF-8 is replaced
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use clap::CommandFactory;
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

/// True when `s`, once trimmed, is one complete numeric literal.
///
/// Accepts signed decimals with optional fraction and exponent (`42`, `-1.5`,
/// `.5`, `1e3`), `Infinity`, and unsigned `0x`/`0o`/`0b` literals.
pub fn is_numeric(s: &str) -> bool {
  static RE_NUMERIC: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(
      r"^(?:[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|[+-]?Infinity|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
    )
    .unwrap()
  });

  let t = s.trim();
  !t.is_empty() && RE_NUMERIC.is_match(t)
}

/// Percent-encode a single URI component.
pub fn encode_uri_component(s: &str) -> String {
  utf8_percent_encode(s, URI_COMPONENT).to_string()
}

pub fn decode_uri_component(s: &str) -> String {
  percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise
/// the current UTC time is used.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
