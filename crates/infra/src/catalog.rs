use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use orderdesk_core::{DomainError, DomainResult, Page, PageParams, ProductId};
use orderdesk_products::{Product, ProductRequest, ProductUseCase};

/// In-memory product catalog for tests/dev.
///
/// Ids are assigned sequentially from 1 and listings are ordered by id, so
/// repeated reads over unchanged data return identical pages.
#[derive(Debug)]
pub struct InMemoryCatalog {
    inner: RwLock<BTreeMap<ProductId, Product>>,
    next_id: AtomicI64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of a single product (used when pricing orders).
    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        map.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn list_where(
        &self,
        params: PageParams,
        keep: impl Fn(&Product) -> bool,
    ) -> DomainResult<Page<Product>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let matching = map.values().filter(|p| keep(p)).cloned().collect();
        Ok(Page::window(matching, params))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("catalog store lock poisoned")
}

fn parse_id(raw: &str) -> DomainResult<ProductId> {
    // An id that cannot exist is reported the same way as an unknown one.
    raw.parse().map_err(|_| DomainError::NotFound)
}

#[async_trait]
impl ProductUseCase for InMemoryCatalog {
    async fn get_all_products(&self, params: PageParams) -> DomainResult<Page<Product>> {
        self.list_where(params, |_| true)
    }

    async fn get_products_by_category(
        &self,
        params: PageParams,
        category: &str,
    ) -> DomainResult<Page<Product>> {
        self.list_where(params, |p| p.category == category)
    }

    async fn create_product(&self, request: ProductRequest) -> DomainResult<()> {
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let product = Product::from_request(id, request, Utc::now());

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(id, product);
        tracing::debug!(product_id = %id, "product created");
        Ok(())
    }

    async fn update_product(&self, id: &str, request: ProductRequest) -> DomainResult<()> {
        let id = parse_id(id)?;
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let product = map.get_mut(&id).ok_or(DomainError::NotFound)?;
        product.apply_update(request, Utc::now());
        tracing::debug!(product_id = %id, "product updated");
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(id)?;
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&id).ok_or(DomainError::NotFound)?;
        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request(name: &str, category: &str) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            sku_id: format!("sku-{name}"),
            description: String::new(),
            category: category.to_string(),
            price: Decimal::new(999, 2),
        }
    }

    async fn seeded() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.create_product(request("fries", "Acompanhamento")).await.unwrap();
        catalog.create_product(request("burger", "Lanche")).await.unwrap();
        catalog.create_product(request("rings", "Acompanhamento")).await.unwrap();
        catalog
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let catalog = seeded().await;
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "fries");
        assert_eq!(catalog.get(ProductId::new(3)).unwrap().name, "rings");
        assert_eq!(catalog.get(ProductId::new(4)), Err(DomainError::NotFound));
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let catalog = seeded().await;
        let page = catalog.get_all_products(PageParams::new(0, 2)).await.unwrap();
        let names: Vec<_> = page.result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fries", "burger"]);
        assert_eq!(page.next, Some(2));

        let page = catalog.get_all_products(PageParams::new(2, 2)).await.unwrap();
        assert_eq!(page.result.len(), 1);
        assert_eq!(page.next, None);
    }

    #[tokio::test]
    async fn list_by_category_filters_exactly() {
        let catalog = seeded().await;
        let page = catalog
            .get_products_by_category(PageParams::new(0, 10), "Acompanhamento")
            .await
            .unwrap();
        let names: Vec<_> = page.result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fries", "rings"]);

        let page = catalog
            .get_products_by_category(PageParams::new(0, 10), "acompanhamento")
            .await
            .unwrap();
        assert!(page.result.is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_products() {
        let catalog = seeded().await;
        assert_eq!(
            catalog.update_product("99", request("x", "y")).await,
            Err(DomainError::NotFound)
        );
        assert_eq!(catalog.delete_product("abc").await, Err(DomainError::NotFound));

        catalog.update_product("2", request("double", "Lanche")).await.unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "double");

        catalog.delete_product("2").await.unwrap();
        assert_eq!(catalog.delete_product("2").await, Err(DomainError::NotFound));
    }
}
