use thiserror::Error;
use uploader_sdk::SdkErrors;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sdk(#[from] SdkErrors),
    #[error("file not found: {0}")]
    FileNotFound(String),
}
