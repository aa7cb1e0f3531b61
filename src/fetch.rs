// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Single seam for upstream REST calls (HTTP agent with bounded timeout, env fixtures for tests)
// role: fetch/upstream
// inputs: UpstreamRequest (url, accept, optional bearer token); env BADGE_TEST_UPSTREAM_* for fixtures
// outputs: Decoded JSON values or a typed FetchError
// side_effects: Network calls to provider APIs
// invariants:
// - Exactly one HTTP call per fetch; no retries, no caching
// - HTTP status >= 400 surfaces as FetchError::Status(code)
// - Timeout expiry surfaces as FetchError::Timeout
// - Bearer tokens are sent only in the Authorization header and never logged
// errors: Returned as FetchError; resolvers map them to provider-prefixed phrases
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::sync::Arc;
use std::time::Duration;

use crate::config::BadgeContext;

pub const USER_AGENT: &str = "last-commit-badge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
  pub url: String,
  pub accept: &'static str,
  pub bearer: Option<String>,
}

impl UpstreamRequest {
  pub fn json(url: String) -> Self {
    Self {
      url,
      accept: "application/json",
      bearer: None,
    }
  }

  pub fn with_accept(mut self, accept: &'static str) -> Self {
    self.accept = accept;
    self
  }

  pub fn with_bearer(mut self, token: Option<&str>) -> Self {
    self.bearer = token.map(str::to_string);
    self
  }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FetchError {
  #[error("upstream returned HTTP {0}")]
  Status(u16),
  #[error("upstream request timed out")]
  Timeout,
  #[error("transport error: {0}")]
  Transport(String),
  #[error("undecodable upstream body: {0}")]
  Decode(String),
}

impl FetchError {
  pub fn status(&self) -> Option<u16> {
    match self {
      FetchError::Status(code) => Some(*code),
      _ => None,
    }
  }
}

// --- Trait seam for upstream REST calls ---
pub trait Fetcher: Send + Sync {
  fn get_json(&self, req: &UpstreamRequest) -> Result<serde_json::Value, FetchError>;
}

pub struct UreqFetcher {
  agent: ureq::Agent,
}

impl UreqFetcher {
  pub fn new(timeout: Duration) -> Self {
    let agent = ureq::Agent::config_builder()
      .timeout_global(Some(timeout))
      .build()
      .new_agent();

    Self { agent }
  }
}

impl Fetcher for UreqFetcher {
  fn get_json(&self, req: &UpstreamRequest) -> Result<serde_json::Value, FetchError> {
    let mut call = self
      .agent
      .get(&req.url)
      .header("Accept", req.accept)
      .header("User-Agent", USER_AGENT);

    if let Some(token) = &req.bearer {
      call = call.header("Authorization", &format!("Bearer {}", token));
    }

    let mut resp = call.call().map_err(|e| match e {
      ureq::Error::StatusCode(code) => FetchError::Status(code),
      ureq::Error::Timeout(_) => FetchError::Timeout,
      other => FetchError::Transport(other.to_string()),
    })?;

    resp
      .body_mut()
      .read_json::<serde_json::Value>()
      .map_err(|e| FetchError::Decode(e.to_string()))
  }
}

/// Serves a canned upstream response from the environment (integration tests).
///
/// - `BADGE_TEST_UPSTREAM_STATUS`: HTTP status to answer with, or `timeout`.
/// - `BADGE_TEST_UPSTREAM_JSON`: body returned when the status is below 400.
pub struct EnvFetcher;

impl Fetcher for EnvFetcher {
  fn get_json(&self, req: &UpstreamRequest) -> Result<serde_json::Value, FetchError> {
    tracing::debug!(url = %req.url, "serving upstream fixture from env");

    if let Ok(status) = std::env::var("BADGE_TEST_UPSTREAM_STATUS") {
      let status = status.trim();

      if status.eq_ignore_ascii_case("timeout") {
        return Err(FetchError::Timeout);
      }

      match status.parse::<u16>() {
        Ok(code) if code >= 400 => return Err(FetchError::Status(code)),
        Ok(_) => {}
        Err(_) => return Err(FetchError::Transport(format!("bad fixture status {:?}", status))),
      }
    }

    let body = std::env::var("BADGE_TEST_UPSTREAM_JSON").unwrap_or_else(|_| "[]".to_string());
    serde_json::from_str::<serde_json::Value>(&body).map_err(|e| FetchError::Decode(e.to_string()))
  }
}

pub fn env_wants_mock() -> bool {
  std::env::var("BADGE_TEST_UPSTREAM_JSON").is_ok() || std::env::var("BADGE_TEST_UPSTREAM_STATUS").is_ok()
}

pub fn build_fetcher(ctx: &BadgeContext) -> Arc<dyn Fetcher> {
  if env_wants_mock() {
    tracing::warn!("BADGE_TEST_UPSTREAM_* set; upstream calls are served from env fixtures");
    Arc::new(EnvFetcher)
  } else {
    Arc::new(UreqFetcher::new(ctx.timeout))
  }
}

/// Canned fetcher that records every request it sees.
#[cfg(test)]
pub struct StaticFetcher {
  response: Result<serde_json::Value, FetchError>,
  seen: std::sync::Mutex<Vec<UpstreamRequest>>,
}

#[cfg(test)]
impl StaticFetcher {
  pub fn ok(body: serde_json::Value) -> Self {
    Self {
      response: Ok(body),
      seen: std::sync::Mutex::new(Vec::new()),
    }
  }

  pub fn err(e: FetchError) -> Self {
    Self {
      response: Err(e),
      seen: std::sync::Mutex::new(Vec::new()),
    }
  }

  pub fn requests(&self) -> Vec<UpstreamRequest> {
    self.seen.lock().map(|v| v.clone()).unwrap_or_default()
  }
}

#[cfg(test)]
impl Fetcher for StaticFetcher {
  fn get_json(&self, req: &UpstreamRequest) -> Result<serde_json::Value, FetchError> {
    if let Ok(mut seen) = self.seen.lock() {
      seen.push(req.clone());
    }
    self.response.clone()
  }
}
