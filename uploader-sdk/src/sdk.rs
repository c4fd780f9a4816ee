use std::path::Path;

use common::{ErrorResponse, UploadResponse, FILE_FIELD, UPLOAD_PATH};
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use url::Url;

use crate::errors::SdkErrors;

#[derive(Debug, Clone)]
/// UploadSDK is a client for the upload service.
pub struct UploadSDK {
    pub client: Client,
    pub upload: Url,
}

impl UploadSDK {
    /// `url` is the base address of the service, e.g. `http://localhost:3000`.
    pub fn new(url: Url) -> Result<Self, SdkErrors> {
        let upload = url.join(UPLOAD_PATH.trim_start_matches('/'))?;
        Ok(UploadSDK {
            client: Client::new(),
            upload,
        })
    }

    /// Reads `path` and sends it as the `file` part, named after its basename.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<UploadResponse, SdkErrors> {
        self.upload_file_as(FILE_FIELD, path).await
    }

    /// Like [`UploadSDK::upload_file`] but under an arbitrary part name.
    pub async fn upload_file_as(
        &self,
        field_name: &str,
        path: impl AsRef<Path>,
    ) -> Result<UploadResponse, SdkErrors> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SdkErrors::MissingFileName(path.display().to_string()))?
            .to_string();
        let contents = tokio::fs::read(path).await?;
        let part = Part::bytes(contents).file_name(file_name);
        self.upload_form(Form::new().part(field_name.to_string(), part))
            .await
    }

    pub async fn upload_bytes(
        &self,
        file_name: impl Into<String>,
        contents: Vec<u8>,
    ) -> Result<UploadResponse, SdkErrors> {
        let part = Part::bytes(contents).file_name(file_name.into());
        self.upload_form(Form::new().part(FILE_FIELD, part)).await
    }

    pub async fn upload_form(&self, form: Form) -> Result<UploadResponse, SdkErrors> {
        let response = self
            .client
            .post(self.upload.clone())
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: Response) -> Result<UploadResponse, SdkErrors> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }
        tracing::error!("{}", body);
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Err(SdkErrors::UploadResponseError(error)),
            Err(_) => Err(SdkErrors::UnexpectedResponse { status, body }),
        }
    }
}
