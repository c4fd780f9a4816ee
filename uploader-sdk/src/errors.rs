use common::ErrorResponse;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkErrors {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("Upload response error: {}", .0.status_message)]
    UploadResponseError(ErrorResponse),
    #[error("Unexpected response with status {status}: {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
    #[error("Path has no file name: {0}")]
    MissingFileName(String),
}
