//! Order use cases and the customer authorizer collaborator.

use async_trait::async_trait;

use orderdesk_core::{DomainResult, OrderId, Page, PageParams};

use crate::cpf::Cpf;
use crate::order::{Order, OrderCreationResponse, OrderRequest, OrderStatus, OrderStatusDto};

/// Business operations on orders.
#[async_trait]
pub trait OrderUseCase: Send + Sync {
    /// Price and persist a validated order.
    ///
    /// Fails with [`DomainError::Unauthorized`](orderdesk_core::DomainError::Unauthorized)
    /// when the authorizer rejects the customer.
    async fn create_order(&self, request: OrderRequest) -> DomainResult<OrderCreationResponse>;

    async fn get_all_orders(&self, params: PageParams) -> DomainResult<Page<Order>>;

    async fn get_order_status(&self, id: OrderId) -> DomainResult<OrderStatusDto>;

    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<()>;
}

/// Decides whether a customer may place orders.
#[async_trait]
pub trait CustomerAuthorizer: Send + Sync {
    async fn authorize(&self, cpf: &Cpf) -> DomainResult<()>;
}
