//! HTTP API: routing, request decoding/validation and response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
