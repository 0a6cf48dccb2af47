//! `orderdesk-core`: shared building blocks for the ordering domain.
//!
//! This crate contains **pure** primitives (no IO, no HTTP): identifiers, the
//! domain error model, field validation and paging.

pub mod error;
pub mod id;
pub mod page;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
pub use page::{Page, PageParams};
pub use validation::{Validate, ValidationError, Violation};
