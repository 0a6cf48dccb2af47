//! Infrastructure layer: collaborators behind the use-case interfaces.
//!
//! Everything here is in-memory (dev/test backings); a SQL-backed catalog or
//! an external authorizer plugs in by implementing the same traits.

pub mod authorizer;
pub mod catalog;
pub mod orders;

pub use authorizer::StaticAuthorizer;
pub use catalog::InMemoryCatalog;
pub use orders::InMemoryOrders;
