use axum::Router;

pub mod orders;
pub mod products;
pub mod system;

#[cfg(test)]
pub(crate) mod testing;

/// Router for the versioned resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/v1/products", products::router())
        .nest("/v1/orders", orders::router())
}
