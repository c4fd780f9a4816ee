mod helpers;

#[cfg(test)]
mod tests {
    use crate::helpers::sdk;
    use reqwest::StatusCode;
    use uploader_sdk::{ErrorResponse, Form, Part, SdkErrors, UploadResponse};

    #[tokio::test]
    async fn test_upload_bytes() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let response = sdk.upload_bytes("notes.txt", b"hello".to_vec()).await?;
        assert_eq!(response.message, "File uploaded successfully");
        Ok(())
    }

    #[tokio::test]
    async fn test_upload_empty_file() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let response = sdk.upload_bytes("empty.bin", Vec::new()).await?;
        assert_eq!(response, UploadResponse::success());
        Ok(())
    }

    #[tokio::test]
    async fn test_upload_file_from_disk() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n")?;
        let response = sdk.upload_file(&path).await?;
        assert_eq!(response, UploadResponse::success());
        Ok(())
    }

    #[tokio::test]
    async fn test_file_part_among_other_fields() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let form = Form::new()
            .text("description", "quarterly report")
            .part("file", Part::bytes(b"a,b,c".to_vec()).file_name("report.csv"))
            .text("tag", "finance");
        let response = sdk.upload_form(form).await?;
        assert_eq!(response, UploadResponse::success());
        Ok(())
    }

    #[tokio::test]
    async fn test_other_field_only() {
        let sdk = sdk().await;
        let form = Form::new().part("other", Part::bytes(b"hello".to_vec()).file_name("notes.txt"));
        let result = sdk.upload_form(form).await;
        assert!(
            matches!(result, Err(SdkErrors::UploadResponseError(ref error)) if *error == ErrorResponse::no_file_uploaded())
        );
    }

    #[tokio::test]
    async fn test_zero_parts() {
        let sdk = sdk().await;
        let result = sdk.upload_form(Form::new()).await;
        match result {
            Err(SdkErrors::UploadResponseError(error)) => {
                assert_eq!(error.status_code, 400);
                assert_eq!(error.status_message, "No file uploaded");
            }
            other => panic!("expected upload error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_under_wrong_field_name() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello")?;
        let result = sdk.upload_file_as("attachment", &path).await;
        assert!(matches!(result, Err(SdkErrors::UploadResponseError(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_upload_same_response() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let first = sdk.upload_bytes("notes.txt", b"hello".to_vec()).await?;
        let second = sdk.upload_bytes("notes.txt", b"hello".to_vec()).await?;
        assert_eq!(first, second);

        let first = sdk.upload_form(Form::new().text("other", "x")).await;
        let second = sdk.upload_form(Form::new().text("other", "x")).await;
        match (first, second) {
            (
                Err(SdkErrors::UploadResponseError(first)),
                Err(SdkErrors::UploadResponseError(second)),
            ) => assert_eq!(first, second),
            other => panic!("expected two upload errors, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_upload_leaves_no_files_behind() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("uploaded.txt");
        sdk.upload_bytes(target.display().to_string(), b"payload".to_vec())
            .await?;
        sdk.upload_bytes("uploaded.txt", b"payload".to_vec()).await?;
        assert!(!target.exists());
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_multipart_content_type() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let response = sdk
            .client
            .post(sdk.upload.clone())
            .body("file=hello")
            .send()
            .await?;
        assert!(response.status().is_client_error());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() -> Result<(), SdkErrors> {
        let sdk = sdk().await;
        let response = sdk.client.get(sdk.upload.clone()).send().await?;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }
}
