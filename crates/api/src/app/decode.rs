//! Request decoding: JSON bodies, list windows and path identifiers.
//!
//! Errors carry the underlying parser text unchanged; handlers put it in the
//! `error` field of the response.

use core::num::ParseIntError;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use serde::de::DeserializeOwned;
use thiserror::Error;

use orderdesk_core::{OrderId, PageParams};

use crate::app::dto::ListQuery;
use crate::app::services::Paging;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Body(#[from] serde_json::Error),

    #[error("{0}")]
    Integer(#[from] ParseIntError),

    #[error("{0}")]
    Query(String),
}

/// Query string as ordered key/value pairs, or the extractor's rejection.
pub type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// `:id` segment as handed over by the router, or its rejection.
pub type RawPath = Result<Path<String>, PathRejection>;

/// Decode a JSON body regardless of the declared content type.
pub fn json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse an optional non-negative integer; absent or empty takes `default`.
pub fn query_int(raw: Option<&str>, default: usize) -> Result<usize, DecodeError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => Ok(value.parse::<usize>()?),
    }
}

/// Collect the list-endpoint parameters; repeated keys keep their first value.
pub fn list_query(query: RawQuery) -> Result<ListQuery, DecodeError> {
    match query {
        Ok(Query(pairs)) => Ok(ListQuery::from_pairs(pairs)),
        Err(rejection) => Err(DecodeError::Query(rejection.body_text())),
    }
}

/// `limit` is parsed before `offset`; the first failure wins.
pub fn page_params(query: &ListQuery, paging: Paging) -> Result<PageParams, DecodeError> {
    let limit = query_int(query.limit.as_deref(), paging.default_limit)?;
    let offset = query_int(query.offset.as_deref(), 0)?;
    Ok(PageParams::new(offset, limit))
}

/// Outcome of reading an `:id` segment.
#[derive(Debug, Error)]
pub enum PathIdError {
    #[error("id path parameter is missing")]
    Missing,

    /// The router could not hand the segment over (e.g. invalid UTF-8).
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Invalid(ParseIntError),
}

/// Raw `:id` segment. A route without the segment, or an empty one, is `Missing`.
pub fn path_id(path: RawPath) -> Result<String, PathIdError> {
    match path {
        Ok(Path(id)) if id.is_empty() => Err(PathIdError::Missing),
        Ok(Path(id)) => Ok(id),
        Err(PathRejection::MissingPathParams(_)) => Err(PathIdError::Missing),
        Err(PathRejection::FailedToDeserializePathParams(e))
            if matches!(e.kind(), ErrorKind::WrongNumberOfParameters { .. }) =>
        {
            Err(PathIdError::Missing)
        }
        Err(rejection) => Err(PathIdError::Rejected(rejection.body_text())),
    }
}

pub fn order_id(path: RawPath) -> Result<OrderId, PathIdError> {
    path_id(path)?.parse().map_err(PathIdError::Invalid)
}
