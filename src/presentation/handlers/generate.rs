use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TextExtractor, WorkpaperRenderer};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub control_description: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub suggestion: String,
    pub source_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<u8>,
}

/// Drafts a testing procedure from the closest archived workpaper. An empty
/// archive answers with a sentinel suggestion, not an error.
#[tracing::instrument(skip(state, request))]
pub async fn generate_handler<E, R>(
    State(state): State<AppState<E, R>>,
    Form(request): Form<GenerateRequest>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    R: WorkpaperRenderer + 'static,
{
    let outcome = state
        .suggestion_service
        .suggest(&request.control_description)
        .await;

    (
        StatusCode::OK,
        Json(GenerateResponse {
            suggestion: outcome.suggestion,
            source_file: outcome.source_file,
            similarity_score: outcome.similarity_score,
        }),
    )
}
