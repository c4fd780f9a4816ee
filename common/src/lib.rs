pub mod models;

pub use models::{ErrorResponse, UploadResponse};

/// Route the upload handler is mounted on.
pub const UPLOAD_PATH: &str = "/api/upload";
/// Name of the multipart part the server looks for.
pub const FILE_FIELD: &str = "file";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
pub const NO_FILE_UPLOADED_MESSAGE: &str = "No file uploaded";
