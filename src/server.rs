use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::badge;
use crate::config::BadgeContext;
use crate::fetch::Fetcher;

// ── Config ──

#[derive(Debug, Clone)]
pub struct ServeConfig {
  pub bind: String,
  pub port: u16,
}

// ── App State ──

struct AppState {
  ctx: BadgeContext,
  fetcher: Arc<dyn Fetcher>,
}

// ── Error Handling ──

struct AppError(anyhow::Error);

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self.0, "badge handler failed");
    let body = serde_json::json!({ "error": self.0.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
  }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
  fn from(err: E) -> Self {
    Self(err.into())
  }
}

// ── Entrypoint ──

pub async fn serve(ctx: BadgeContext, fetcher: Arc<dyn Fetcher>, config: ServeConfig) -> anyhow::Result<()> {
  let app = router(ctx, fetcher);

  let addr = format!("{}:{}", config.bind, config.port);
  let listener = tokio::net::TcpListener::bind(&addr).await?;
  tracing::info!("badge endpoint listening on http://{addr}");
  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}

/// Build the router (for testing without binding to a port).
pub fn router(ctx: BadgeContext, fetcher: Arc<dyn Fetcher>) -> Router {
  let state = Arc::new(AppState { ctx, fetcher });

  Router::new()
    .route("/", get(get_badge))
    .route("/api", get(get_badge))
    .route("/health", get(health))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

// ── Health ──

async fn health() -> Json<serde_json::Value> {
  Json(serde_json::json!({ "ok": true }))
}

// ── GET /?data=provider/args... ──

#[derive(Deserialize)]
struct BadgeQuery {
  data: Option<String>,
}

async fn get_badge(
  State(state): State<Arc<AppState>>,
  Query(query): Query<BadgeQuery>,
  headers: HeaderMap,
) -> Result<Response, AppError> {
  let user_agent = headers
    .get(header::USER_AGENT)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);

  // upstream calls are blocking; keep them off the reactor threads
  let resp = tokio::task::spawn_blocking(move || {
    badge::respond(
      query.data.as_deref(),
      user_agent.as_deref(),
      &state.ctx,
      state.fetcher.as_ref(),
    )
  })
  .await?;

  let status = StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::OK);
  Ok((status, Json(resp.body)).into_response())
}
