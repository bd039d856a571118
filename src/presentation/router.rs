use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{TextExtractor, WorkpaperRenderer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    export_handler, generate_handler, health_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, R>(state: AppState<E, R>) -> Router
where
    E: TextExtractor + 'static,
    R: WorkpaperRenderer + 'static,
{
    // allow-all CORS for the dev frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.max_upload_size_bytes());

    Router::new()
        .route("/", get(health_handler))
        .route("/upload", post(upload_handler::<E, R>))
        .route("/generate", post(generate_handler::<E, R>))
        .route("/export", post(export_handler::<E, R>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}
