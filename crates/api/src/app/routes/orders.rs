use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderdesk_core::{OrderId, Validate};
use orderdesk_orders::{OrderRequest, OrderStatus, OrderStatusRequest};

use crate::app::decode::{self, PathIdError, RawPath, RawQuery};
use crate::app::errors::{self, OperationContext};
use crate::app::services::AppServices;

const CREATE: OperationContext =
    OperationContext::new("failed to create order").with_unauthorized("customer cpf invalid");
const LIST_ALL: OperationContext = OperationContext::new("failed to get all orders");
const GET_STATUS: OperationContext = OperationContext::new("failed to get order status");
const UPDATE_STATUS: OperationContext = OperationContext::new("failed to update order status");

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id/status", get(get_order_status).put(update_order_status))
}

fn order_id(path: RawPath) -> Result<OrderId, axum::response::Response> {
    decode::order_id(path).map_err(|e| match e {
        PathIdError::Missing => errors::bad_request("[id] path parameter is required", "id is missing"),
        e => errors::bad_request("[id] path parameter is invalid", e),
    })
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let request: OrderRequest = match decode::json_body(&body) {
        Ok(r) => r,
        Err(e) => return errors::bad_request("failed to bind order payload", e),
    };
    if let Err(e) = request.validate() {
        return errors::bad_request("invalid order payload", e);
    }

    match services.orders.create_order(request).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => errors::use_case_error_to_response(&CREATE, e),
    }
}

pub async fn list_orders(
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

    match services.orders.get_all_orders(params).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::use_case_error_to_response(&LIST_ALL, e),
    }
}

pub async fn get_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    path: RawPath,
) -> axum::response::Response {
    let id = match order_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.orders.get_order_status(id).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => errors::use_case_error_to_response(&GET_STATUS, e),
    }
}

pub async fn update_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    path: RawPath,
    body: Bytes,
) -> axum::response::Response {
    let id = match order_id(path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let request: OrderStatusRequest = match decode::json_body(&body) {
        Ok(r) => r,
        Err(e) => return errors::bad_request("failed to bind order status payload", e),
    };
    let status = match OrderStatus::try_from(&request) {
        Ok(s) => s,
        Err(e) => return errors::bad_request("invalid order status payload", e),
    };

    match services.orders.update_order_status(id, status).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::use_case_error_to_response(&UPDATE_STATUS, e),
    }
}
