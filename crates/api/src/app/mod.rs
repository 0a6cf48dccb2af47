//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: use-case wiring (trait objects + paging defaults)
//! - `routes/`: HTTP handlers, one file per resource
//! - `decode.rs`: body/query/path decoding
//! - `dto.rs`: transport-only request shapes
//! - `errors.rs`: error classification and the error response body

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod decode;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    let api = routes::router().layer(Extension(Arc::new(services)));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}
