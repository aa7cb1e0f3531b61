// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Process-wide immutable configuration: provider tokens and request-handling knobs
// role: config/context
// inputs: env GITHUB_TOKEN / GH_TOKEN / GITLAB_TOKEN; normalized CLI values
// outputs: BadgeContext shared read-only by every request
// invariants:
// - Tokens are read once at startup; blank values count as absent
// - GITHUB_TOKEN wins over GH_TOKEN
// - Token values never appear in Debug output
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderTokens {
  pub github: Option<String>,
  pub gitlab: Option<String>,
}

impl ProviderTokens {
  pub fn from_env() -> Self {
    Self {
      github: get_github_token(),
      gitlab: env_token("GITLAB_TOKEN"),
    }
  }
}

impl fmt::Debug for ProviderTokens {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mask = |t: &Option<String>| if t.is_some() { "<set>" } else { "<unset>" };
    f.debug_struct("ProviderTokens")
      .field("github", &mask(&self.github))
      .field("gitlab", &mask(&self.gitlab))
      .finish()
  }
}

fn env_token(key: &str) -> Option<String> {
  match std::env::var(key) {
    Ok(t) if !t.trim().is_empty() => Some(t.trim().to_string()),
    _ => None,
  }
}

/// Discover a GitHub token: GITHUB_TOKEN first, then GH_TOKEN.
pub fn get_github_token() -> Option<String> {
  env_token("GITHUB_TOKEN").or_else(|| env_token("GH_TOKEN"))
}

/// Everything a request needs besides its own input. Built once, then shared.
#[derive(Debug, Clone)]
pub struct BadgeContext {
  pub tokens: ProviderTokens,
  pub timeout: Duration,
  /// Answer unparsable `data` with HTTP 400 instead of 200.
  pub strict: bool,
  /// Pinned "now" for deterministic output.
  pub now_override: Option<DateTime<Utc>>,
}

impl Default for BadgeContext {
  fn default() -> Self {
    Self {
      tokens: ProviderTokens::default(),
      timeout: DEFAULT_TIMEOUT,
      strict: false,
      now_override: None,
    }
  }
}

impl BadgeContext {
  pub fn now(&self) -> DateTime<Utc> {
    crate::util::effective_now(self.now_override)
  }
}
