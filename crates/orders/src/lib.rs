//! Orders domain module.
//!
//! Order model and status lifecycle, the payloads accepted by the HTTP layer
//! with their validation rules (including the CPF checksum), and the use-case
//! and authorizer interfaces implemented elsewhere.

pub mod cpf;
pub mod order;
pub mod usecase;

pub use cpf::Cpf;
pub use order::{
    ItemType, Order, OrderCreationResponse, OrderItem, OrderItemRequest, OrderRequest, OrderStatus,
    OrderStatusDto, OrderStatusRequest,
};
pub use usecase::{CustomerAuthorizer, OrderUseCase};
