use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::{BadgeContext, ProviderTokens};
use crate::normalize::parse_timestamp;
use crate::server::ServeConfig;

#[derive(Parser, Debug)]
#[command(
    name = "last-commit-badge",
    version,
    about = "Last-commit badge JSON for GitLab, GitHub, Bitbucket and Codeberg repositories",
    long_about = None
)]
pub struct Cli {
  /// Badge command, e.g. github/octocat/Hello-World or gitlab/gitlab.com/group/project
  pub data: Option<String>,

  /// Client identity used to pick the output schema (e.g. "Shields.io/2003a")
  #[arg(long)]
  pub user_agent: Option<String>,

  /// Run the HTTP endpoint (GET /?data=...) instead of rendering a single badge
  #[arg(long)]
  pub serve: bool,

  /// Address to bind in --serve mode
  #[arg(long, default_value = "127.0.0.1")]
  pub bind: String,

  /// Port to listen on in --serve mode
  #[arg(long, default_value_t = 3000)]
  pub port: u16,

  /// Upstream request timeout in seconds
  #[arg(long, default_value_t = 5)]
  pub timeout_secs: u64,

  /// Answer an empty/absent command with HTTP 400 (exit status 1 in one-shot mode)
  #[arg(long)]
  pub strict: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used for commit age (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub enum Mode {
  Once {
    data: Option<String>,
    user_agent: Option<String>,
  },
  Serve(ServeConfig),
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub mode: Mode,
  pub ctx: BadgeContext,
}

pub fn normalize(cli: Cli, tokens: ProviderTokens) -> Result<EffectiveConfig> {
  let mode = match (cli.serve, cli.data, cli.user_agent) {
    (true, Some(_), _) => bail!("A badge command cannot be combined with --serve"),
    (true, None, Some(_)) => bail!("--user-agent only applies to one-shot rendering"),
    (true, None, None) => Mode::Serve(ServeConfig {
      bind: cli.bind,
      port: cli.port,
    }),
    (false, data, user_agent) => Mode::Once { data, user_agent },
  };

  if cli.timeout_secs == 0 {
    bail!("--timeout-secs must be at least 1");
  }

  let now_override = match cli.now_override.as_deref() {
    Some(raw) => match parse_timestamp(raw) {
      Some(dt) => Some(dt),
      None => bail!("Invalid --now-override {:?}: expected an RFC 3339 timestamp", raw),
    },
    None => None,
  };

  Ok(EffectiveConfig {
    mode,
    ctx: BadgeContext {
      tokens,
      timeout: Duration::from_secs(cli.timeout_secs),
      strict: cli.strict,
      now_override,
    },
  })
}
