use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::Summarizer;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{health_handler, root_handler, summarize_handler};
use crate::presentation::state::AppState;

pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: Summarizer + 'static + ?Sized,
{
    let cors = build_cors_layer(&state.settings.cors);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // The store enforces the real per-file cap; the body limit sits above it
    // and only bounds the whole multipart body including framing overhead.
    let body_limit = state.settings.max_upload_bytes() as usize + 64 * 1024;

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/summarize", post(summarize_handler::<S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::ACCEPT];

    let origin = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            settings
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
}
