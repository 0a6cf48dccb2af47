use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use orderdesk_core::{DomainError, DomainResult, OrderId, Page, PageParams};
use orderdesk_orders::{
    Cpf, CustomerAuthorizer, ItemType, Order, OrderCreationResponse, OrderItem, OrderRequest,
    OrderStatus, OrderStatusDto, OrderUseCase,
};

use crate::catalog::InMemoryCatalog;

/// In-memory order book for tests/dev.
///
/// Products are resolved through the shared catalog at creation time and
/// embedded as snapshots; customers with a CPF go through `A` first.
#[derive(Debug)]
pub struct InMemoryOrders<A> {
    catalog: Arc<InMemoryCatalog>,
    authorizer: A,
    inner: RwLock<BTreeMap<OrderId, Order>>,
    next_order_id: AtomicI64,
    next_item_id: AtomicI64,
}

impl<A> InMemoryOrders<A>
where
    A: CustomerAuthorizer,
{
    pub fn new(catalog: Arc<InMemoryCatalog>, authorizer: A) -> Self {
        Self {
            catalog,
            authorizer,
            inner: RwLock::new(BTreeMap::new()),
            next_order_id: AtomicI64::new(1),
            next_item_id: AtomicI64::new(1),
        }
    }

    fn build_items(&self, request: &OrderRequest) -> DomainResult<Vec<OrderItem>> {
        request
            .items
            .iter()
            .map(|item| {
                let item_type = ItemType::parse(&item.item_type)
                    .ok_or_else(|| DomainError::invariant(format!("unknown item type {}", item.item_type)))?;
                Ok(OrderItem {
                    id: self.next_item_id.fetch_add(1, Ordering::Relaxed),
                    quantity: item.quantity,
                    item_type,
                    product: self.catalog.get(item.product_id)?,
                })
            })
            .collect()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("order store lock poisoned")
}

/// Payment payload handed back to the customer.
fn qr_payload(order: &Order) -> String {
    format!("orderdesk://pay/{}?amount={}", order.id, order.total_amount)
}

#[async_trait]
impl<A> OrderUseCase for InMemoryOrders<A>
where
    A: CustomerAuthorizer,
{
    async fn create_order(&self, request: OrderRequest) -> DomainResult<OrderCreationResponse> {
        let status = request
            .parsed_status()
            .ok_or_else(|| DomainError::invariant("order status is required"))?;

        let customer_cpf = match request.cpf() {
            Some(raw) => {
                let cpf = Cpf::parse(raw).ok_or(DomainError::Unauthorized)?;
                self.authorizer.authorize(&cpf).await?;
                Some(cpf)
            }
            None => None,
        };

        let items = self.build_items(&request)?;
        let total_amount = Order::total_of(&items)?;
        let order = Order {
            id: OrderId::new(self.next_order_id.fetch_add(1, Ordering::Relaxed)),
            total_amount,
            items,
            coupon: request.coupon.filter(|c| !c.is_empty()),
            status,
            created_at: Utc::now(),
            customer_cpf: customer_cpf.map(|c| c.as_str().to_string()),
        };

        let response = OrderCreationResponse {
            qr_code: qr_payload(&order),
            order_id: order.id,
        };

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        tracing::debug!(order_id = %order.id, total = %order.total_amount, "order created");
        map.insert(order.id, order);
        Ok(response)
    }

    async fn get_all_orders(&self, params: PageParams) -> DomainResult<Page<Order>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(Page::window(map.values().cloned().collect(), params))
    }

    async fn get_order_status(&self, id: OrderId) -> DomainResult<OrderStatusDto> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        map.get(&id)
            .map(|order| OrderStatusDto { status: order.status })
            .ok_or(DomainError::NotFound)
    }

    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let order = map.get_mut(&id).ok_or(DomainError::NotFound)?;
        if !order.status.can_move_to(status) {
            return Err(DomainError::invariant(format!(
                "order {id} cannot move from {} to {status}",
                order.status
            )));
        }
        order.status = status;
        tracing::debug!(order_id = %id, %status, "order status updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorizer::StaticAuthorizer;
    use orderdesk_core::ProductId;
    use orderdesk_orders::OrderItemRequest;
    use orderdesk_products::{ProductRequest, ProductUseCase};
    use rust_decimal::Decimal;

    async fn book(authorizer: StaticAuthorizer) -> InMemoryOrders<StaticAuthorizer> {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog
            .create_product(ProductRequest {
                name: "Batata Frita".to_string(),
                sku_id: "333".to_string(),
                description: "Batata canoa".to_string(),
                category: "Acompanhamento".to_string(),
                price: Decimal::new(999, 2),
            })
            .await
            .unwrap();
        InMemoryOrders::new(catalog, authorizer)
    }

    fn request(cpf: Option<&str>) -> OrderRequest {
        OrderRequest {
            items: vec![OrderItemRequest {
                product_id: ProductId::new(1),
                quantity: 3,
                item_type: "UNIT".to_string(),
            }],
            coupon: Some("APP10".to_string()),
            customer_cpf: cpf.map(str::to_string),
            status: "CREATED".to_string(),
        }
    }

    #[tokio::test]
    async fn create_prices_items_from_catalog() {
        let orders = book(StaticAuthorizer::allow_all()).await;
        let created = orders.create_order(request(Some("529.982.247-25"))).await.unwrap();
        assert_eq!(created.order_id, OrderId::new(1));
        assert!(created.qr_code.contains("amount=29.97"));

        let page = orders.get_all_orders(PageParams::new(0, 10)).await.unwrap();
        let order = &page.result[0];
        assert_eq!(order.total_amount, Decimal::new(2997, 2));
        assert_eq!(order.items[0].product.name, "Batata Frita");
        assert_eq!(order.customer_cpf.as_deref(), Some("52998224725"));
        assert_eq!(order.status, OrderStatus::Created);
    }

    #[tokio::test]
    async fn blocked_customer_is_unauthorized_and_nothing_is_stored() {
        let orders = book(StaticAuthorizer::blocking(["52998224725"])).await;
        let err = orders.create_order(request(Some("52998224725"))).await.unwrap_err();
        assert_eq!(err, DomainError::Unauthorized);

        let page = orders.get_all_orders(PageParams::new(0, 10)).await.unwrap();
        assert!(page.result.is_empty());
    }

    #[tokio::test]
    async fn anonymous_orders_skip_the_authorizer() {
        let orders = book(StaticAuthorizer::blocking(["52998224725"])).await;
        assert!(orders.create_order(request(None)).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let orders = book(StaticAuthorizer::allow_all()).await;
        let mut req = request(None);
        req.items[0].product_id = ProductId::new(42);
        assert_eq!(orders.create_order(req).await.unwrap_err(), DomainError::NotFound);
    }

    #[tokio::test]
    async fn status_moves_forward_only() {
        let orders = book(StaticAuthorizer::allow_all()).await;
        let id = orders.create_order(request(None)).await.unwrap().order_id;

        orders.update_order_status(id, OrderStatus::Paid).await.unwrap();
        assert_eq!(
            orders.get_order_status(id).await.unwrap().status,
            OrderStatus::Paid
        );

        let err = orders
            .update_order_status(id, OrderStatus::Created)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[tokio::test]
    async fn overflowing_total_fails_and_stores_nothing() {
        let orders = book(StaticAuthorizer::allow_all()).await;
        orders
            .catalog
            .create_product(ProductRequest {
                name: "gold".to_string(),
                price: Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0),
                ..ProductRequest::default()
            })
            .await
            .unwrap();

        let mut req = request(None);
        req.items[0].product_id = ProductId::new(2);
        req.items[0].quantity = 10_000_000_000;
        assert_eq!(
            orders.create_order(req).await.unwrap_err(),
            DomainError::invariant("order total overflow")
        );

        let page = orders.get_all_orders(PageParams::new(0, 10)).await.unwrap();
        assert!(page.result.is_empty());
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let orders = book(StaticAuthorizer::allow_all()).await;
        assert_eq!(
            orders.get_order_status(OrderId::new(9)).await.unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            orders
                .update_order_status(OrderId::new(9), OrderStatus::Done)
                .await
                .unwrap_err(),
            DomainError::NotFound
        );
    }
}
