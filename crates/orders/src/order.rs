use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::validation::{not_in, one_of, Validate, ValidationError, Violation, Violations};
use orderdesk_core::{DomainError, DomainResult, OrderId, ProductId};
use orderdesk_products::Product;

use crate::cpf;

/// Order status lifecycle, in the order an order moves through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Received,
    InProgress,
    Ready,
    Done,
}

impl OrderStatus {
    /// Wire names, in lifecycle order.
    pub const NAMES: &'static [&'static str] =
        &["CREATED", "PAID", "RECEIVED", "IN_PROGRESS", "READY", "DONE"];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Ready => "READY",
            OrderStatus::Done => "DONE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(OrderStatus::Created),
            "PAID" => Some(OrderStatus::Paid),
            "RECEIVED" => Some(OrderStatus::Received),
            "IN_PROGRESS" => Some(OrderStatus::InProgress),
            "READY" => Some(OrderStatus::Ready),
            "DONE" => Some(OrderStatus::Done),
            _ => None,
        }
    }

    /// Statuses only move forward; staying put is allowed.
    pub fn can_move_to(self, next: OrderStatus) -> bool {
        next >= self
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an item quantity is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Unit,
}

impl ItemType {
    pub const NAMES: &'static [&'static str] = &["UNIT"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UNIT" => Some(ItemType::Unit),
            _ => None,
        }
    }
}

/// Order line with a snapshot of the product at ordering time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub product: Product,
}

impl OrderItem {
    /// `price × quantity`; fails instead of overflowing.
    pub fn subtotal(&self) -> DomainResult<Decimal> {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(total_overflow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_cpf: Option<String>,
}

impl Order {
    pub fn total_of(items: &[OrderItem]) -> DomainResult<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.subtotal()?).ok_or_else(total_overflow)
        })
    }
}

fn total_overflow() -> DomainError {
    DomainError::invariant("order total overflow")
}

// -------------------------
// Request payloads
// -------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Order creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub items: Vec<OrderItemRequest>,
    pub coupon: Option<String>,
    pub customer_cpf: Option<String>,
    pub status: String,
}

impl OrderRequest {
    /// Status after validation; `None` only for payloads that fail [`Validate`].
    pub fn parsed_status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }

    /// CPF when one was supplied (empty strings count as absent).
    pub fn cpf(&self) -> Option<&str> {
        self.customer_cpf.as_deref().filter(|c| !c.is_empty())
    }
}

impl Validate for OrderRequest {
    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(self.parsed_status().is_some(), || Violation::Invalid("Status"));
        if let Some(raw) = self.cpf() {
            v.check(cpf::is_valid(raw), || Violation::InvalidCpf(raw.to_string()));
        }
        v.check(!self.items.is_empty(), || Violation::Required { field: "items" });
        for item in &self.items {
            v.extend(item.violations());
        }
        v
    }
}

impl Validate for OrderItemRequest {
    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        v.check(self.quantity > 0, || Violation::Required { field: "quantity" });
        if let Some(violation) = one_of("type", &self.item_type, ItemType::NAMES) {
            v.push(violation);
        }
        v
    }
}

/// Status update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatusRequest {
    pub status: String,
}

impl TryFrom<&OrderStatusRequest> for OrderStatus {
    type Error = ValidationError;

    fn try_from(request: &OrderStatusRequest) -> Result<Self, Self::Error> {
        OrderStatus::parse(&request.status)
            .ok_or_else(|| not_in("status", &request.status, OrderStatus::NAMES).into())
    }
}

impl Validate for OrderStatusRequest {
    fn violations(&self) -> Violations {
        let mut v = Violations::new();
        if let Some(violation) = one_of("status", &self.status, OrderStatus::NAMES) {
            v.push(violation);
        }
        v
    }
}

// -------------------------
// Response payloads
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreationResponse {
    pub qr_code: String,
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusDto {
    pub status: OrderStatus,
}
