use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{ErrorResponse, NO_FILE_UPLOADED_MESSAGE};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{}", NO_FILE_UPLOADED_MESSAGE)]
    MissingFileField,
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingFileField => StatusCode::BAD_REQUEST,
            UploadError::Multipart(e) => e.status(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        let status_message = match &self {
            UploadError::MissingFileField => NO_FILE_UPLOADED_MESSAGE.to_string(),
            UploadError::Multipart(e) => e.body_text(),
        };
        (
            status,
            Json(ErrorResponse::new(status.as_u16(), status_message)),
        )
            .into_response()
    }
}
