//! Delivery couriers.
//!
//! # Actor Framework
//! [`Courier`] implements [`ActorEntity`](actor_framework::ActorEntity); allocation
//! runs as an `ActionAny` so that finding a free courier and marking it busy
//! happen in one step inside the courier actor.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for couriers. `0` is reserved for [`Courier::unassigned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourierId(pub u32);

impl CourierId {
    pub const UNASSIGNED: CourierId = CourierId(0);
}

impl From<u32> for CourierId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CourierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "courier_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Courier {
    pub id: CourierId,
    pub name: String,
    pub phone: String,
    pub is_available: bool,
}

impl Courier {
    pub fn new(id: CourierId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            is_available: true,
        }
    }

    /// Placeholder bound to an order before a courier is allocated.
    pub fn unassigned() -> Self {
        Self {
            id: CourierId::UNASSIGNED,
            name: "No Delivery Person Available".to_string(),
            phone: "No Phone Number Available".to_string(),
            is_available: false,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != CourierId::UNASSIGNED
    }
}

/// Payload for adding a courier to the pool. New couriers start available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierCreate {
    pub id: u32,
    pub name: String,
    pub phone: String,
}
