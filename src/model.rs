// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the badge JSON model (default and Shields.io shapes) and the provider outcome shared by resolvers and rendering
// role: model/types
// outputs: Serializable structs with stable field names; one normalized outcome type for every provider
// invariants: days == None means an error/no-data outcome; subject is always "last commit"; color defaults to grey
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

pub const SUBJECT: &str = "last commit";
pub const DEFAULT_COLOR: &str = "grey";
pub const MALFORMED_ARGS: &str = "malformed args";
pub const UNSUPPORTED_TYPE: &str = "unsupported type";

/// Normalized result of one provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOutcome {
  pub status_text: String,
  pub days: Option<i64>,
}

impl ProviderOutcome {
  pub fn resolved(status_text: String, days: i64) -> Self {
    Self { status_text, days: Some(days) }
  }

  pub fn failed(status_text: impl Into<String>) -> Self {
    Self { status_text: status_text.into(), days: None }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BadgeResult {
  pub subject: String,
  pub status: String,
  pub color: String,
}

impl BadgeResult {
  pub fn new(status: impl Into<String>) -> Self {
    Self {
      subject: SUBJECT.to_string(),
      status: status.into(),
      color: DEFAULT_COLOR.to_string(),
    }
  }
}

/// Endpoint badge shape consumed by the Shields.io renderer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShieldsBadge {
  #[serde(rename = "schemaVersion")]
  pub schema_version: u8,
  pub label: String,
  pub message: String,
  pub color: String,
}

impl From<BadgeResult> for ShieldsBadge {
  fn from(b: BadgeResult) -> Self {
    Self {
      schema_version: 1,
      label: b.subject,
      message: b.status,
      color: b.color,
    }
  }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RenderedBadge {
  Shields(ShieldsBadge),
  Default(BadgeResult),
}
