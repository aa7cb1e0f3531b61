use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use last_commit_badge::cli::{normalize, Cli, Mode};
use last_commit_badge::config::ProviderTokens;
use last_commit_badge::{badge, fetch, server, util};

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(ExitCode::SUCCESS);
  }

  init_tracing();

  // Phase 1: normalize CLI and load tokens once
  let cfg = normalize(cli, ProviderTokens::from_env())?;
  tracing::debug!(tokens = ?cfg.ctx.tokens, timeout = ?cfg.ctx.timeout, "configuration loaded");

  // Phase 2: pick the upstream backend
  let fetcher = fetch::build_fetcher(&cfg.ctx);

  // Phase 3: render one badge or serve
  match cfg.mode {
    Mode::Once { data, user_agent } => {
      let resp = badge::respond(data.as_deref(), user_agent.as_deref(), &cfg.ctx, fetcher.as_ref());
      println!("{}", serde_json::to_string(&resp.body)?);

      if resp.status_code == 200 {
        Ok(ExitCode::SUCCESS)
      } else {
        Ok(ExitCode::FAILURE)
      }
    }
    Mode::Serve(serve_cfg) => {
      let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
      runtime.block_on(server::serve(cfg.ctx, fetcher, serve_cfg))?;
      Ok(ExitCode::SUCCESS)
    }
  }
}
