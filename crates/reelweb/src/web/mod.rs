//! Public-facing web server for the resolver front-end.
//!
//! Serves the input form at `/`, handles the form POST, and exposes a
//! health endpoint. Runs on WEB_PORT (default 3000). Every resolution
//! outcome renders as HTTP 200 with the message in the page body — the
//! browser form flow has no use for error status codes.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use reelcore::core::config;
use reelcore::core::validation::{self, ValidationError};
use reelcore::resolve::{FaultKind, Resolver, ResolveError};

pub mod pages;

/// User-facing message copy rendered into the page.
pub mod messages {
    /// Single fixed message for every validation rejection — empty input
    /// and malformed URLs alike. The distinction only matters in the log.
    pub const INVALID_URL: &str = "Please enter a valid Instagram URL";

    pub const RESOLVE_PREFIX: &str = "An error occurred while fetching the video. ";
    pub const PRIVATE: &str = "This account is private and cannot be accessed.";
    pub const NOT_FOUND: &str = "The post was not found or has been deleted.";
    pub const BLOCKED: &str = "Instagram is blocking this request. Please try:\n\
        • Using a different URL\n\
        • Waiting a few moments and trying again\n\
        • Ensuring the post is public";
    pub const NETWORK: &str = "Network error. Please check your connection and try again.";
    pub const UNREACHABLE: &str = "Unable to connect to Instagram. Please try again later.";
    pub const GENERIC: &str = "Please ensure:\n\
        • The URL is correct\n\
        • The account is public\n\
        • The post contains a video\n\
        • The post is still available";
}

/// Shared state for the web server.
#[derive(Clone)]
pub struct WebState {
    resolver: Arc<Resolver>,
    started_at: Instant,
}

/// Form body for the resolve POST. Field name matches the page input.
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    #[serde(rename = "instagramUrl", default)]
    pub instagram_url: String,
}

/// Build the application router. Separated from `start_web_server` so
/// tests can drive it with `tower::ServiceExt::oneshot`.
pub fn build_router(resolver: Arc<Resolver>) -> Router {
    let state = WebState {
        resolver,
        started_at: Instant::now(),
    };

    Router::new()
        .route("/", get(index_handler).post(download_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(config::STATIC_DIR.as_str()))
        .with_state(state)
}

/// Start the public web server.
pub async fn start_web_server(port: u16, resolver: Arc<Resolver>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(resolver);

    log::info!("Starting web server on http://{}", addr);
    log::info!("  /        - Resolver form");
    log::info!("  /health  - Health check");
    log::info!("  /static  - Static assets ({})", config::STATIC_DIR.as_str());

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / — renders the empty input form.
async fn index_handler() -> Html<String> {
    Html(pages::render_index(None, None))
}

/// POST / — validates the submitted URL, runs the resolver, renders the
/// outcome. Validation failures never reach the network.
async fn download_handler(State(state): State<WebState>, Form(form): Form<DownloadForm>) -> Html<String> {
    let url = match validation::validate_instagram_url(&form.instagram_url) {
        Ok(url) => url,
        Err(err) => {
            if !matches!(err, ValidationError::Empty) {
                log::warn!("Rejected input: {}", err);
            }
            return Html(pages::render_index(None, Some(messages::INVALID_URL)));
        }
    };

    match state.resolver.resolve(&url).await {
        Ok(resolved) => Html(pages::render_index(Some(&resolved.video_url), None)),
        Err(err) => Html(pages::render_index(None, Some(&classify_resolve_error(&err)))),
    }
}

/// GET /health — simple health check.
async fn health_handler(State(state): State<WebState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().as_secs();
    (StatusCode::OK, Json(json!({"status": "ok", "uptime_secs": uptime_secs})))
}

/// Map the aggregate failure to one canned user-facing message, chosen by
/// the most specific structured fault kind the chain observed.
pub fn classify_resolve_error(err: &ResolveError) -> String {
    let detail = match err.dominant_kind() {
        FaultKind::PrivateAccount => messages::PRIVATE,
        FaultKind::NotFound => messages::NOT_FOUND,
        FaultKind::Blocked => messages::BLOCKED,
        FaultKind::Network => messages::NETWORK,
        FaultKind::Timeout => messages::UNREACHABLE,
        FaultKind::NoVideo | FaultKind::Malformed | FaultKind::Unknown => messages::GENERIC,
    };
    format!("{}{}", messages::RESOLVE_PREFIX, detail)
}
