// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Provider registry (tag -> kind) and the shared resolve flow (build request, fetch once, extract, normalize)
// role: providers/registry
// inputs: provider tag, positional args, BadgeContext, Fetcher
// outputs: ProviderOutcome; provider-specific shapes never leave the submodules
// side_effects: One upstream call per resolve (none when args are missing)
// invariants:
// - Unknown tags yield None, not an error
// - resolve never fails; every error becomes a provider-prefixed phrase with days == None
// - Missing required args short-circuit to "malformed args" before any network call
// errors: MissingArgs/DataError/FetchError converted locally
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod bitbucket;
pub mod codeberg;
pub mod github;
pub mod gitlab;

use std::fmt;

use crate::config::{BadgeContext, ProviderTokens};
use crate::fetch::{Fetcher, UpstreamRequest};
use crate::model::{ProviderOutcome, MALFORMED_ARGS};
use crate::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
  Gitlab,
  Github,
  Bitbucket,
  Codeberg,
}

impl ProviderKind {
  pub const ALL: [ProviderKind; 4] = [
    ProviderKind::Gitlab,
    ProviderKind::Github,
    ProviderKind::Bitbucket,
    ProviderKind::Codeberg,
  ];

  /// Registry lookup. Tags are matched exactly.
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|k| k.name() == tag)
  }

  pub fn name(self) -> &'static str {
    match self {
      ProviderKind::Gitlab => gitlab::NAME,
      ProviderKind::Github => github::NAME,
      ProviderKind::Bitbucket => bitbucket::NAME,
      ProviderKind::Codeberg => codeberg::NAME,
    }
  }

  pub fn build_request(self, args: &[String], tokens: &ProviderTokens) -> Result<UpstreamRequest, MissingArgs> {
    match self {
      ProviderKind::Gitlab => gitlab::build_request(args, tokens.gitlab.as_deref()),
      ProviderKind::Github => github::build_request(args, tokens.github.as_deref()),
      ProviderKind::Bitbucket => bitbucket::build_request(args),
      ProviderKind::Codeberg => codeberg::build_request(args),
    }
  }

  pub fn commit_timestamp(self, body: serde_json::Value) -> Result<String, DataError> {
    match self {
      ProviderKind::Gitlab => gitlab::commit_timestamp(body),
      ProviderKind::Github => github::commit_timestamp(body),
      ProviderKind::Bitbucket => bitbucket::commit_timestamp(body),
      ProviderKind::Codeberg => codeberg::commit_timestamp(body),
    }
  }
}

impl fmt::Display for ProviderKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{provider}: missing {what}")]
pub struct MissingArgs {
  pub provider: &'static str,
  pub what: &'static str,
}

/// Payload decoded fine but carried no usable commit date.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
  #[error("no commits")]
  NoCommits,
  #[error("invalid commit data")]
  InvalidCommitData,
}

fn required<'a>(args: &'a [String], idx: usize, provider: &'static str, what: &'static str) -> Result<&'a str, MissingArgs> {
  args
    .get(idx)
    .map(String::as_str)
    .filter(|s| !s.is_empty())
    .ok_or(MissingArgs { provider, what })
}

fn optional(args: &[String], idx: usize) -> Option<&str> {
  args.get(idx).map(String::as_str).filter(|s| !s.is_empty())
}

/// Decode a provider payload into its typed shape.
fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, DataError> {
  serde_json::from_value(body).map_err(|_| DataError::InvalidCommitData)
}

/// Resolve the last commit for `kind`, converting every failure into an outcome.
pub fn resolve(kind: ProviderKind, args: &[String], ctx: &BadgeContext, fetcher: &dyn Fetcher) -> ProviderOutcome {
  let provider = kind.name();

  // Phase 1: build the upstream request; early guard when positional args are missing
  let req = match kind.build_request(args, &ctx.tokens) {
    Ok(req) => req,
    Err(e) => {
      tracing::debug!(error = %e, "not enough arguments");
      return ProviderOutcome::failed(MALFORMED_ARGS);
    }
  };

  tracing::debug!(provider, url = %req.url, authenticated = req.bearer.is_some(), "fetching last commit");

  // Phase 2: single upstream call
  let body = match fetcher.get_json(&req) {
    Ok(body) => body,
    Err(e) => return normalize::outcome_for_fetch_error(provider, &e),
  };

  // Phase 3: extract timestamp from the provider shape and normalize
  match kind.commit_timestamp(body) {
    Ok(ts) => normalize::outcome_for_timestamp(provider, &ts, ctx.now()),
    Err(e) => {
      tracing::warn!(provider, error = %e, "unusable upstream payload");
      ProviderOutcome::failed(format!("{}: {}", provider, e))
    }
  }
}
