use axum::{extract::DefaultBodyLimit, routing::post, Router};
use common::UPLOAD_PATH;
pub mod errors;
mod handler;

pub fn router() -> Router {
    Router::new()
        .route(UPLOAD_PATH, post(handler::root))
        .layer(DefaultBodyLimit::disable())
}
