use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{TextExtractor, WorkpaperRenderer};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub uploaded_files: Vec<String>,
}

/// Accepts one or more workpaper files and archives their extracted text.
/// Parts are processed in order; a failure mid-request leaves the earlier
/// parts appended and persisted.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E, R>(
    State(state): State<AppState<E, R>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    R: WorkpaperRenderer + 'static,
{
    let mut uploaded_files: Vec<String> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        // parts without a filename are not file uploads
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(filename = %filename, error = %e, "Failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read file: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        tracing::debug!(filename = %filename, bytes = data.len(), "Processing file upload");

        if let Err(e) = state.ingestion_service.ingest(&filename, &data).await {
            tracing::error!(filename = %filename, error = %e, "Workpaper ingestion failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to process {}: {}", filename, e),
                }),
            )
                .into_response();
        }

        uploaded_files.push(filename);
    }

    if uploaded_files.is_empty() {
        tracing::warn!("Upload request with no file parts");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(count = uploaded_files.len(), "Workpapers archived");

    (
        StatusCode::OK,
        Json(UploadResponse {
            message: format!("Uploaded files: {:?}", uploaded_files),
            uploaded_files,
        }),
    )
        .into_response()
}
