use std::path::PathBuf;

use clap::Parser;
use uploader_sdk::UploadSDK;
use url::Url;

use crate::errors::CliError;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Upload {
    #[arg(long, env = "UPLOAD_URL", default_value = "http://localhost:3000")]
    pub url: Url,
    #[arg(long, short)]
    pub file: PathBuf,
    /// Multipart part name the file is sent under.
    #[arg(long, default_value = "file")]
    pub field: String,
}

impl Upload {
    pub async fn run(self) -> Result<(), CliError> {
        if !self.file.is_file() {
            return Err(CliError::FileNotFound(self.file.display().to_string()));
        }
        let sdk = UploadSDK::new(self.url)?;
        tracing::info!("Uploading {} to {}", self.file.display(), sdk.upload);
        let response = sdk.upload_file_as(&self.field, &self.file).await?;
        println!("{}", response.message);
        Ok(())
    }
}
