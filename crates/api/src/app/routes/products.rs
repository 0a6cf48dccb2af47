use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use orderdesk_core::Validate;
use orderdesk_products::ProductRequest;

use crate::app::decode::{self, PathIdError, RawPath, RawQuery};
use crate::app::errors::{self, OperationContext};
use crate::app::services::AppServices;

const LIST_BY_CATEGORY: OperationContext = OperationContext::new("failed to get products by category");
const LIST_ALL: OperationContext = OperationContext::new("failed to get all products");
const CREATE: OperationContext = OperationContext::new("failed to create product");
const UPDATE: OperationContext =
    OperationContext::new("failed to update product").with_not_found("product not found");
const DELETE: OperationContext =
    OperationContext::new("failed to delete product").with_not_found("product not found");

pub fn router() -> Router {
    Router::new()
        // PUT/DELETE without an id answer with the missing-id error.
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/:id", put(update_product).delete(delete_product))
}

fn product_id(path: RawPath) -> Result<String, axum::response::Response> {
    decode::path_id(path).map_err(|e| match e {
        PathIdError::Missing => errors::bad_request("id path param is required", e),
        e => errors::bad_request("id path param is invalid", e),
    })
}

/// Decode and validate a product payload, or build the 400 response.
fn product_payload(body: &[u8]) -> Result<ProductRequest, axum::response::Response> {
    let request: ProductRequest = match decode::json_body(body) {
        Ok(r) => r,
        Err(e) => return Err(errors::bad_request("failed to bind product payload", e)),
    };
    if let Err(e) = request.validate() {
        return Err(errors::bad_request("invalid product payload", e));
    }
    Ok(request)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: RawQuery,
) -> axum::response::Response {
    let query = match decode::list_query(query) {
        Ok(q) => q,
        Err(e) => return errors::bad_request("invalid query parameters", e),
    };
    let params = match decode::page_params(&query, services.paging) {
        Ok(p) => p,
        Err(e) => return errors::bad_request("invalid query parameters", e),
    };

    let (result, ctx) = match query.category() {
        Some(category) => (
            services.products.get_products_by_category(params, category).await,
            LIST_BY_CATEGORY,
        ),
        None => (services.products.get_all_products(params).await, LIST_ALL),
    };

    match result {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::use_case_error_to_response(&ctx, e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let request = match product_payload(&body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.products.create_product(request).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::use_case_error_to_response(&CREATE, e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    path: RawPath,
    body: Bytes,
) -> axum::response::Response {
    let id = match product_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let request = match product_payload(&body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.products.update_product(&id, request).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::use_case_error_to_response(&UPDATE, e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    path: RawPath,
) -> axum::response::Response {
    let id = match product_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.products.delete_product(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::use_case_error_to_response(&DELETE, e),
    }
}
