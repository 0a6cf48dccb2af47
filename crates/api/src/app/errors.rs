//! Error classification and the shared error body.
//!
//! Every failure becomes `{"message": <static text>, "error": <underlying text>}`.

use core::fmt::Display;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use orderdesk_core::DomainError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub message: &'a str,
    pub error: String,
}

pub fn json_error(status: StatusCode, message: &str, err: impl Display) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorResponse {
            message,
            error: err.to_string(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: &str, err: impl Display) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, message, err)
}

/// Messages an operation uses when its use case fails.
///
/// `not_found` / `unauthorized` are only set for operations where those
/// conditions are part of the contract; otherwise they surface as `failure`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperationContext {
    pub failure: &'static str,
    pub not_found: Option<&'static str>,
    pub unauthorized: Option<&'static str>,
}

impl OperationContext {
    pub const fn new(failure: &'static str) -> Self {
        Self {
            failure,
            not_found: None,
            unauthorized: None,
        }
    }

    pub const fn with_not_found(self, message: &'static str) -> Self {
        Self {
            not_found: Some(message),
            ..self
        }
    }

    pub const fn with_unauthorized(self, message: &'static str) -> Self {
        Self {
            unauthorized: Some(message),
            ..self
        }
    }
}

/// Map a use-case error to its status and message; anything unrecognized is a 500.
pub fn classify(ctx: &OperationContext, err: &DomainError) -> (StatusCode, &'static str) {
    let known = match err {
        DomainError::NotFound => ctx.not_found.map(|m| (StatusCode::NOT_FOUND, m)),
        DomainError::Unauthorized => ctx.unauthorized.map(|m| (StatusCode::FORBIDDEN, m)),
        DomainError::InvariantViolation(_) | DomainError::Internal(_) => None,
    };
    known.unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, ctx.failure))
}

pub fn use_case_error_to_response(ctx: &OperationContext, err: DomainError) -> axum::response::Response {
    let (status, message) = classify(ctx, &err);
    if status.is_server_error() {
        tracing::error!(error = %err, "{message}");
    } else {
        tracing::warn!(error = %err, "{message}");
    }
    json_error(status, message, err)
}
