use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TextExtractor, WorkpaperRenderer};
use crate::domain::WorkpaperDraft;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub control_name: String,
    pub control_description: String,
    pub suggestion: String,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub message: String,
    pub file_path: String,
}

/// Renders the draft to the fixed export path, overwriting the previous
/// export, and reports the path written.
#[tracing::instrument(skip(state, request), fields(control_name = %request.control_name))]
pub async fn export_handler<E, R>(
    State(state): State<AppState<E, R>>,
    Form(request): Form<ExportRequest>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    R: WorkpaperRenderer + 'static,
{
    let draft = WorkpaperDraft {
        control_name: request.control_name,
        control_description: request.control_description,
        suggestion: request.suggestion,
    };

    match state.renderer.render(&draft).await {
        Ok(path) => (
            StatusCode::OK,
            Json(ExportResponse {
                message: "Workpaper generated successfully.".to_string(),
                file_path: path.display().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Workpaper export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Export failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
