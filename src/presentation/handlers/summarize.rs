use std::io;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::TryStreamExt;
use serde::Serialize;

use crate::application::ports::Summarizer;
use crate::application::services::{UploadError, AUDIO_FIELD};
use crate::domain::StoredFile;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub status: String,
    pub summary: String,
    #[serde(rename = "fileInfo")]
    pub file_info: FileInfo,
}

#[derive(Serialize)]
pub struct FileInfo {
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    pub mimetype: String,
    pub size: u64,
}

impl From<&StoredFile> for FileInfo {
    fn from(file: &StoredFile) -> Self {
        Self {
            filename: file.stored_name.clone(),
            original_name: file.original_name.clone(),
            mimetype: file.mime_type.clone(),
            size: file.size_bytes,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler<S>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Response
where
    S: Summarizer + 'static + ?Sized,
{
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Summarize request without an audio part");
                return upload_error_response(
                    &UploadError::MissingFile,
                    state.settings.errors.expose_details,
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart body: {}", e),
                        details: None,
                    }),
                )
                    .into_response();
            }
        };

        // Only the designated part is consumed; anything else is drained.
        if field.name() != Some(AUDIO_FIELD) {
            tracing::debug!(field = ?field.name(), "Ignoring non-audio part");
            continue;
        }

        let original_name = field.file_name().unwrap_or("unknown").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(
            original_name = %original_name,
            mime_type = %mime_type,
            "Processing audio upload"
        );

        let stream = Box::pin(field.map_err(io::Error::other));

        let stored = match state
            .upload_service
            .receive(&original_name, &mime_type, stream)
            .await
        {
            Ok(stored) => stored,
            Err(e) => return upload_error_response(&e, state.settings.errors.expose_details),
        };

        return match state.summarizer.summarize(&stored).await {
            Ok(summary) => (
                StatusCode::OK,
                Json(SummarizeResponse {
                    status: "success".to_string(),
                    summary,
                    file_info: FileInfo::from(&stored),
                }),
            )
                .into_response(),
            Err(e) => {
                // The file is already on disk at this point; no cleanup.
                tracing::error!(error = %e, stored_name = %stored.stored_name, "Summarization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Summarization failed".to_string(),
                        details: Some(e.to_string()),
                    }),
                )
                    .into_response()
            }
        };
    }
}

fn upload_error_response(err: &UploadError, expose_details: bool) -> Response {
    let (status, message, details) = match err {
        UploadError::MissingFile | UploadError::UnsupportedType { .. } | UploadError::TooLarge { .. } => {
            (StatusCode::BAD_REQUEST, err.to_string(), None)
        }
        UploadError::UploadFailed(source) => {
            tracing::error!(error = %source, "Upload failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upload failed".to_string(),
                expose_details.then(|| source.to_string()),
            )
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: message,
            details,
        }),
    )
        .into_response()
}
