use crate::model::{BadgeResult, RenderedBadge};

/// Client identities starting with this prefix get the Shields.io endpoint schema.
pub const SHIELDS_PREFIX: &str = "Shields.io";

pub fn wants_shields(user_agent: Option<&str>) -> bool {
  user_agent.is_some_and(|ua| ua.starts_with(SHIELDS_PREFIX))
}

pub fn render(badge: BadgeResult, user_agent: Option<&str>) -> RenderedBadge {
  if wants_shields(user_agent) {
    RenderedBadge::Shields(badge.into())
  } else {
    RenderedBadge::Default(badge)
  }
}
