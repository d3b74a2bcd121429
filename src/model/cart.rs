//! Per-user shopping cart.
//!
//! # Actor Framework
//! [`Cart`] implements [`ActorEntity`](actor_framework::ActorEntity) with a
//! [`lazy_default`](actor_framework::ActorEntity::lazy_default), so a cart exists
//! as soon as something is added to it and reading never creates one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for users (and their carts).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line item, used both in carts and in order requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub dish: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl CartItem {
    pub fn new(dish: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            dish: dish.into(),
            quantity,
            price,
        }
    }

    /// `quantity × price`, or `None` if it does not fit in a [`Decimal`].
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// Describes the first problem with this item, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err(format!("quantity of '{}' must be at least 1", self.dish));
        }
        if self.price < Decimal::ZERO {
            return Err(format!("price of '{}' must not be negative", self.dish));
        }
        if self.line_total().is_none() {
            return Err(format!("line total of '{}' is out of range", self.dish));
        }
        Ok(())
    }
}

/// Sums line totals, failing on the first item that is out of range.
pub fn checked_total<'a>(items: impl IntoIterator<Item = &'a CartItem>) -> Option<Decimal> {
    items.into_iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(item.line_total()?)
    })
}

/// A user's cart.
///
/// Fields are private: the only way to change a cart is [`Cart::add_item`], which
/// keeps `total` equal to the sum of the line totals. Deserializing recomputes
/// the total from the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartRecord")]
pub struct Cart {
    user_id: UserId,
    items: Vec<CartItem>,
    total: Decimal,
}

impl Cart {
    /// An empty cart for `user_id`, with a zero total.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item and adds its line total.
    ///
    /// The cart is unchanged if the new total would be out of range.
    pub(crate) fn add_item(&mut self, item: CartItem) -> Result<(), String> {
        let total = item
            .line_total()
            .and_then(|line| self.total.checked_add(line))
            .ok_or_else(|| format!("cart total would be out of range after '{}'", item.dish))?;
        self.total = total;
        self.items.push(item);
        Ok(())
    }
}

#[derive(Deserialize)]
struct CartRecord {
    user_id: UserId,
    items: Vec<CartItem>,
}

impl TryFrom<CartRecord> for Cart {
    type Error = String;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let mut cart = Cart::empty(record.user_id);
        for item in record.items {
            item.validate()?;
            cart.add_item(item)?;
        }
        Ok(cart)
    }
}
