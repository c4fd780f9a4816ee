use axum::{
    extract::Multipart,
    http::{header::CONTENT_LENGTH, HeaderMap},
    Json,
};
use common::{UploadResponse, FILE_FIELD};

use super::errors::UploadError;

/// Clients serialize a form without parts as an empty body rather than a
/// lone closing boundary, which the multipart parser reports as incomplete.
fn is_empty_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        == Some(0)
}

/// Accepts a multipart form and reports success once a `file` part is seen.
///
/// Parts before the `file` part are skipped without being buffered. The part
/// itself is never read.
pub async fn root(
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    if is_empty_body(&headers) {
        tracing::info!("Upload rejected: empty multipart body");
        return Err(UploadError::MissingFileField);
    }
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field_name = ?field.name(), "skipping multipart field");
            continue;
        }
        tracing::debug!(
            file_name = ?field.file_name(),
            content_type = ?field.content_type(),
            "file field received"
        );
        // Storage of the uploaded file (local disk, object store) hooks in here.
        tracing::info!("File uploaded successfully");
        return Ok(Json(UploadResponse::success()));
    }
    tracing::info!("Upload rejected: no file field");
    Err(UploadError::MissingFileField)
}
