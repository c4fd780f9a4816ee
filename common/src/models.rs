use serde::{Deserialize, Serialize};

use crate::{NO_FILE_UPLOADED_MESSAGE, UPLOAD_SUCCESS_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

impl UploadResponse {
    pub fn success() -> Self {
        UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Error body returned for every non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub status_message: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
        let status_message = status_message.into();
        ErrorResponse {
            status_code,
            message: status_message.clone(),
            status_message,
        }
    }

    pub fn no_file_uploaded() -> Self {
        ErrorResponse::new(400, NO_FILE_UPLOADED_MESSAGE)
    }
}
