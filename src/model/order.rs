//! Placed orders and the order ledger's view of them.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity). Its key is
//! the order actor's sequence number, so ids are `ORDER-1`, `ORDER-2`, ... in
//! creation order.
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderRequest`])
//! - The restaurant and courier snapshots bound in `on_create`

use crate::model::{CartItem, Courier, Restaurant};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders, rendered as `ORDER-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORDER-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order id: {0}")]
pub struct InvalidOrderId(pub String);

impl FromStr for OrderId {
    type Err = InvalidOrderId;

    /// Accepts only the exact form produced by `Display`: no sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("ORDER-")
            .and_then(|n| n.parse().ok())
            .map(OrderId)
            .filter(|id| id.to_string() == s)
            .ok_or_else(|| InvalidOrderId(s.to_string()))
    }
}

impl Serialize for OrderId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub restaurant_name: String,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Pending,
    OutForDelivery,
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Pending => f.write_str("Pending"),
            DeliveryStatus::OutForDelivery => f.write_str("OutForDelivery"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Snapshot of the restaurant when the order was placed.
    pub restaurant: Restaurant,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    /// Stored status. Status queries use [`Order::delivery_status`] instead.
    pub status: DeliveryStatus,
    /// Snapshot of the courier allocated to this order.
    pub courier: Courier,
}

impl Order {
    /// Status as reported to callers: derived from whether a courier is bound,
    /// not read from [`Order::status`].
    pub fn delivery_status(&self) -> DeliveryStatus {
        if self.courier.is_assigned() {
            DeliveryStatus::OutForDelivery
        } else {
            DeliveryStatus::Pending
        }
    }

    pub fn status_view(&self) -> OrderStatusView {
        OrderStatusView {
            order_id: self.id,
            total: self.total,
            status: self.delivery_status(),
            courier_name: self.courier.name.clone(),
            courier_phone: self.courier.phone.clone(),
        }
    }
}

/// Answer to a status query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatusView {
    pub order_id: OrderId,
    pub total: Decimal,
    pub status: DeliveryStatus,
    pub courier_name: String,
    pub courier_phone: String,
}
