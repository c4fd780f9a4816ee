use crate::utils::shutdown::shutdown_signal;
use crate::{errors::ServerError, upload, Args};
use axum::{serve, Router};
use core::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Routing table of the service, without any listener attached.
pub fn app() -> Router {
    Router::new().merge(upload::router())
}

pub async fn start(args: Args) -> Result<(), ServerError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(ServerError::AddressParse)?;

    let listener = TcpListener::bind(address).await?;

    info!("Listening on {}", address);

    serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
