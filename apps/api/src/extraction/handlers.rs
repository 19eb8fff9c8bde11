//! Axum route handler for resume upload and parsing.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{parse_resume, DocumentFormat};
use crate::state::AppState;

/// Maximum accepted upload size (5 MB), matching the frontend contract.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// POST /api/upload-resume
///
/// Accepts a multipart `file` field (PDF or DOCX up to 5 MB), runs the
/// extraction pipeline, and returns the serialized outcome: 200 on success,
/// 422 with the diagnostic outcome when parsing fails. The upload lives
/// only in memory for the duration of the request; nothing is persisted.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (file_name, data) = read_file_field(multipart).await?;

    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let format = DocumentFormat::from_extension(extension)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::Validation(
            "File too large. Maximum size is 5MB.".to_string(),
        ));
    }

    info!(
        "parsing upload '{}' ({} bytes, {:?})",
        file_name,
        data.len(),
        format
    );

    let outcome = parse_resume(&data, format, state.strategy.as_ref()).await;

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(outcome)).into_response())
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok((file_name, data));
        }
    }
    Err(AppError::Validation(
        "Missing 'file' field in multipart body".to_string(),
    ))
}
