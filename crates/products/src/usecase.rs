//! Catalog use cases consumed by the HTTP layer.

use async_trait::async_trait;

use orderdesk_core::{DomainResult, Page, PageParams};

use crate::product::{Product, ProductRequest};

/// Business operations on the product catalog.
///
/// Implementations report a missing product with
/// [`DomainError::NotFound`](orderdesk_core::DomainError::NotFound).
#[async_trait]
pub trait ProductUseCase: Send + Sync {
    async fn get_all_products(&self, params: PageParams) -> DomainResult<Page<Product>>;

    async fn get_products_by_category(
        &self,
        params: PageParams,
        category: &str,
    ) -> DomainResult<Page<Product>>;

    async fn create_product(&self, request: ProductRequest) -> DomainResult<()>;

    /// `id` is the raw path segment; parsing it is the implementation's concern.
    async fn update_product(&self, id: &str, request: ProductRequest) -> DomainResult<()>;

    async fn delete_product(&self, id: &str) -> DomainResult<()>;
}
