// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Per-request orchestration: parse data, look up provider, resolve, classify color, render schema
// role: orchestration/badge
// inputs: raw `data` string, client identity (User-Agent), BadgeContext, Fetcher
// outputs: BadgeResponse (HTTP status + rendered badge)
// invariants:
// - Unparsable data never reaches the network and yields "malformed args"
// - Unknown provider yields "unsupported type" with grey color
// - Color is classified only when days is known and status is not a sentinel
// - HTTP status is 200 except for malformed data in strict mode (400)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::color;
use crate::command;
use crate::config::BadgeContext;
use crate::fetch::Fetcher;
use crate::model::{BadgeResult, RenderedBadge, MALFORMED_ARGS, UNSUPPORTED_TYPE};
use crate::providers::{self, ProviderKind};
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeResponse {
  pub status_code: u16,
  pub body: RenderedBadge,
}

/// Resolve `data` into a fully populated badge.
pub fn build_badge(data: Option<&str>, ctx: &BadgeContext, fetcher: &dyn Fetcher) -> BadgeResult {
  // Phase 1: parse; early guard for absent/empty data
  let Some(desc) = command::parse(data) else {
    return BadgeResult::new(MALFORMED_ARGS);
  };

  tracing::debug!(provider = %desc.provider_tag, args = ?desc.args, "badge request");

  // Phase 2: registry lookup
  let Some(kind) = ProviderKind::from_tag(&desc.provider_tag) else {
    return BadgeResult::new(UNSUPPORTED_TYPE);
  };

  // Phase 3: resolve and classify
  let outcome = providers::resolve(kind, &desc.args, ctx, fetcher);
  let mut badge = BadgeResult::new(outcome.status_text);

  if let Some(days) = outcome.days {
    if badge.status != MALFORMED_ARGS && badge.status != UNSUPPORTED_TYPE {
      badge.color = color::classify(days).to_string();
    }
  }

  badge
}

pub fn respond(data: Option<&str>, user_agent: Option<&str>, ctx: &BadgeContext, fetcher: &dyn Fetcher) -> BadgeResponse {
  let badge = build_badge(data, ctx, fetcher);
  let status_code = if ctx.strict && command::parse(data).is_none() {
    400
  } else {
    200
  };

  BadgeResponse {
    status_code,
    body: render::render(badge, user_agent),
  }
}
