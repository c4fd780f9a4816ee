use tokio::net::TcpListener;
use uploader_sdk::UploadSDK;
use url::Url;

/// Serves the upload app on an ephemeral port and returns its base url.
pub async fn spawn_server() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, uploader::server::app()).await.unwrap();
    });
    Url::parse(&format!("http://{}", address)).unwrap()
}

pub async fn sdk() -> UploadSDK {
    let url = spawn_server().await;
    UploadSDK::new(url).unwrap()
}
