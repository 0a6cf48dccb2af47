//! Products domain module.
//!
//! This crate holds the catalog model, the product payload accepted by the
//! HTTP layer together with its validation rules, and the use-case interface
//! that storage-backed implementations provide.

pub mod product;
pub mod usecase;

pub use product::{Product, ProductRequest};
pub use usecase::ProductUseCase;
