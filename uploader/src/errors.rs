use std::net::AddrParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind or serve: {0}")]
    Server(#[from] std::io::Error),

    #[error("invalid listen address: {0}")]
    AddressParse(#[from] AddrParseError),
}
