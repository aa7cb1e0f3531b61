//! Last-commit badge endpoint.
//!
//! A `data` command such as `github/octocat/Hello-World` names a provider and
//! repository coordinates; the crate fetches the newest commit from that
//! provider's REST API and renders `{subject, status, color}` (or the
//! Shields.io endpoint schema when the caller identifies as Shields.io).

pub mod badge;
pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod fetch;
pub mod model;
pub mod normalize;
pub mod providers;
pub mod render;
pub mod server;
pub mod util;
