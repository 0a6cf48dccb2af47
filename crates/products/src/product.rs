use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::ProductId;
use orderdesk_core::validation::{Validate, Violation, Violations};

/// Catalog product as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku_id: String,
    pub description: String,
    /// Free-text label (e.g. "Acompanhamento").
    pub category: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product from a validated payload.
    pub fn from_request(id: ProductId, request: ProductRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: request.name,
            sku_id: request.sku_id,
            description: request.description,
            category: request.category,
            price: request.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields, keeping identity and creation time.
    pub fn apply_update(&mut self, request: ProductRequest, now: DateTime<Utc>) {
        self.name = request.name;
        self.sku_id = request.sku_id;
        self.description = request.description;
        self.category = request.category;
        self.price = request.price;
        self.updated_at = now;
    }
}

/// Create/update payload.
///
/// Missing fields decode to their zero value so that validation, not the
/// decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRequest {
    pub name: String,
    pub sku_id: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
}

impl Validate for ProductRequest {
    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(self.price > Decimal::ZERO, || Violation::Required { field: "price" });
        v
    }
}
