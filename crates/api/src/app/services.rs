use std::sync::Arc;

use orderdesk_infra::{InMemoryCatalog, InMemoryOrders, StaticAuthorizer};
use orderdesk_orders::OrderUseCase;
use orderdesk_products::ProductUseCase;

use crate::config::ApiConfig;

/// Defaults applied when a list request omits its window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Paging {
    pub default_limit: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            default_limit: crate::config::DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Use cases shared by every handler.
///
/// Handlers hold no other state; implementations own their synchronization.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn ProductUseCase>,
    pub orders: Arc<dyn OrderUseCase>,
    pub paging: Paging,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductUseCase>, orders: Arc<dyn OrderUseCase>) -> Self {
        Self {
            products,
            orders,
            paging: Paging::default(),
        }
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }
}

/// In-memory wiring (dev/test): shared catalog, order book, static authorizer.
pub fn build_in_memory_services(config: &ApiConfig) -> AppServices {
    let authorizer = StaticAuthorizer::blocking(config.blocked_customer_cpfs.iter().map(String::as_str));
    tracing::info!(
        blocked_customers = authorizer.blocked_count(),
        default_page_limit = config.default_page_limit,
        "using in-memory catalog and order store"
    );

    let catalog = Arc::new(InMemoryCatalog::new());
    let orders = Arc::new(InMemoryOrders::new(catalog.clone(), authorizer));

    AppServices::new(catalog, orders).with_paging(Paging {
        default_limit: config.default_page_limit,
    })
}
