//! Hand-rolled use-case fakes for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::rejection::PathRejection;
use axum::extract::{Extension, FromRequestParts, Path, Query};
use axum::response::Response;

use orderdesk_core::{DomainResult, OrderId, Page, PageParams};
use orderdesk_orders::{Order, OrderCreationResponse, OrderRequest, OrderStatus, OrderStatusDto, OrderUseCase};
use orderdesk_products::{Product, ProductRequest, ProductUseCase};

use crate::app::services::AppServices;

pub const PRODUCT_REQUEST_VALID: &str = r#"{
    "name": "Product 1",
    "skuId": "33333",
    "description": "Description of product 1",
    "category": "Acompanhamento",
    "price": 9.99
}"#;

pub const PRODUCT_REQUEST_MISSING_PRICE: &str = r#"{
    "name": "Product 1",
    "skuId": "33333",
    "description": "Description of product 1",
    "category": "Acompanhamento"
}"#;

pub const ORDER_REQUEST_VALID: &str = r#"{
    "items": [{"productId": 222, "quantity": 1, "type": "UNIT"}],
    "coupon": "APP10",
    "customerCpf": "52998224725",
    "status": "CREATED"
}"#;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductCall {
    All(PageParams),
    ByCategory(PageParams, String),
    Create(ProductRequest),
    Update(String, ProductRequest),
    Delete(String),
}

pub struct FakeProducts {
    page: DomainResult<Page<Product>>,
    write: DomainResult<()>,
    calls: Mutex<Vec<ProductCall>>,
}

impl FakeProducts {
    pub fn new() -> Self {
        Self {
            page: Ok(Page::empty()),
            write: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, page: DomainResult<Page<Product>>) -> Self {
        self.page = page;
        self
    }

    pub fn with_write(mut self, write: DomainResult<()>) -> Self {
        self.write = write;
        self
    }

    pub fn calls(&self) -> Vec<ProductCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ProductCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ProductUseCase for FakeProducts {
    async fn get_all_products(&self, params: PageParams) -> DomainResult<Page<Product>> {
        self.record(ProductCall::All(params));
        self.page.clone()
    }

    async fn get_products_by_category(
        &self,
        params: PageParams,
        category: &str,
    ) -> DomainResult<Page<Product>> {
        self.record(ProductCall::ByCategory(params, category.to_string()));
        self.page.clone()
    }

    async fn create_product(&self, request: ProductRequest) -> DomainResult<()> {
        self.record(ProductCall::Create(request));
        self.write.clone()
    }

    async fn update_product(&self, id: &str, request: ProductRequest) -> DomainResult<()> {
        self.record(ProductCall::Update(id.to_string(), request));
        self.write.clone()
    }

    async fn delete_product(&self, id: &str) -> DomainResult<()> {
        self.record(ProductCall::Delete(id.to_string()));
        self.write.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCall {
    Create(OrderRequest),
    All(PageParams),
    Status(OrderId),
    UpdateStatus(OrderId, OrderStatus),
}

pub struct FakeOrders {
    created: DomainResult<OrderCreationResponse>,
    page: DomainResult<Page<Order>>,
    status: DomainResult<OrderStatusDto>,
    write: DomainResult<()>,
    calls: Mutex<Vec<OrderCall>>,
}

impl FakeOrders {
    pub fn new() -> Self {
        Self {
            created: Ok(OrderCreationResponse {
                qr_code: String::new(),
                order_id: OrderId::new(0),
            }),
            page: Ok(Page::empty()),
            status: Ok(OrderStatusDto {
                status: OrderStatus::Created,
            }),
            write: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_created(mut self, created: DomainResult<OrderCreationResponse>) -> Self {
        self.created = created;
        self
    }

    pub fn with_page(mut self, page: DomainResult<Page<Order>>) -> Self {
        self.page = page;
        self
    }

    pub fn with_status(mut self, status: DomainResult<OrderStatusDto>) -> Self {
        self.status = status;
        self
    }

    pub fn with_write(mut self, write: DomainResult<()>) -> Self {
        self.write = write;
        self
    }

    pub fn calls(&self) -> Vec<OrderCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: OrderCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OrderUseCase for FakeOrders {
    async fn create_order(&self, request: OrderRequest) -> DomainResult<OrderCreationResponse> {
        self.record(OrderCall::Create(request));
        self.created.clone()
    }

    async fn get_all_orders(&self, params: PageParams) -> DomainResult<Page<Order>> {
        self.record(OrderCall::All(params));
        self.page.clone()
    }

    async fn get_order_status(&self, id: OrderId) -> DomainResult<OrderStatusDto> {
        self.record(OrderCall::Status(id));
        self.status.clone()
    }

    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> DomainResult<()> {
        self.record(OrderCall::UpdateStatus(id, status));
        self.write.clone()
    }
}

pub fn services(products: &Arc<FakeProducts>, orders: &Arc<FakeOrders>) -> Extension<Arc<AppServices>> {
    Extension(Arc::new(AppServices::new(products.clone(), orders.clone())))
}

pub fn product_services(products: FakeProducts) -> (Extension<Arc<AppServices>>, Arc<FakeProducts>) {
    let products = Arc::new(products);
    (services(&products, &Arc::new(FakeOrders::new())), products)
}

pub fn order_services(orders: FakeOrders) -> (Extension<Arc<AppServices>>, Arc<FakeOrders>) {
    let orders = Arc::new(orders);
    (services(&Arc::new(FakeProducts::new()), &orders), orders)
}

/// What the `:id` extractor yields on a route without the segment.
pub async fn no_path() -> Result<Path<String>, PathRejection> {
    let (mut parts, _) = axum::http::Request::new(()).into_parts();
    Path::<String>::from_request_parts(&mut parts, &()).await
}

/// Query pairs as the list extractor hands them over.
pub fn query_pairs(raw: &[(&str, &str)]) -> crate::app::decode::RawQuery {
    Ok(Query(
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    ))
}

/// Status and body text of a handler response.
pub async fn read(resp: Response) -> (u16, String) {
    let status = resp.status().as_u16();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
