pub mod errors;
pub mod sdk;

pub use common::{ErrorResponse, UploadResponse};
pub use errors::SdkErrors;
pub use reqwest::multipart::{Form, Part};
pub use sdk::UploadSDK;
