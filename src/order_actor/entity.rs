//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order runs in two steps inside the order actor:
//!
//! 1. [`from_create_params`](ActorEntity::from_create_params) validates the items
//!    and computes the total. Nothing outside the order actor is touched yet.
//! 2. [`on_create`](ActorEntity::on_create) resolves the restaurant through the
//!    catalog, then allocates a courier. The restaurant is resolved first so that
//!    an unknown restaurant never consumes a courier.
//!
//! If either step fails the order is not stored and the sequence number is not
//! advanced. Allocation is the last fallible step, so a courier is only ever
//! taken for an order that is then stored.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::{CatalogClient, CourierClient};
use crate::model::{checked_total, CartItem, Courier, DeliveryStatus, Order, OrderId, OrderRequest, Restaurant};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderRequest;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = (CatalogClient, CourierClient);
    type Error = OrderError;

    fn assign_id(seq: u32, _params: &OrderRequest) -> OrderId {
        OrderId(seq)
    }

    fn from_create_params(id: OrderId, params: OrderRequest) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one item".to_string(),
            ));
        }
        params
            .items
            .iter()
            .try_for_each(CartItem::validate)
            .map_err(OrderError::ValidationError)?;

        let total = checked_total(&params.items).ok_or_else(|| {
            OrderError::ValidationError("order total is out of range".to_string())
        })?;

        Ok(Self {
            id,
            restaurant: Restaurant {
                name: params.restaurant_name,
                ..Default::default()
            },
            items: params.items,
            total,
            status: DeliveryStatus::Pending,
            courier: Courier::unassigned(),
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (catalog_client, courier_client) = ctx;

        debug!(order_id = %self.id, restaurant = %self.restaurant.name, "Resolving restaurant");
        let restaurant = catalog_client
            .find_restaurant(&self.restaurant.name)
            .await?
            .ok_or_else(|| OrderError::RestaurantNotFound(self.restaurant.name.clone()))?;

        let courier = courier_client
            .allocate_any()
            .await?
            .ok_or(OrderError::NoCourierAvailable)?;
        info!(order_id = %self.id, courier_id = %courier.id, "Courier allocated");

        self.restaurant = restaurant;
        self.courier = courier;
        self.status = DeliveryStatus::OutForDelivery;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<(), OrderError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request(items: Vec<CartItem>) -> OrderRequest {
        OrderRequest {
            restaurant_name: "abc".into(),
            items,
        }
    }

    #[test]
    fn total_is_computed_from_the_items() {
        let order = Order::from_create_params(
            OrderId(1),
            request(vec![
                CartItem::new("apple", 2, Decimal::new(599, 2)),
                CartItem::new("pizza", 1, Decimal::new(1099, 2)),
            ]),
        )
        .unwrap();

        assert_eq!(order.total, Decimal::new(2297, 2));
        assert_eq!(order.delivery_status(), DeliveryStatus::Pending);
        assert_eq!(order.restaurant.name, "abc");
    }

    #[test]
    fn one_bad_item_rejects_the_whole_request() {
        let err = Order::from_create_params(
            OrderId(1),
            request(vec![
                CartItem::new("apple", 2, Decimal::new(599, 2)),
                CartItem::new("pizza", 0, Decimal::new(1099, 2)),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));

        let err = Order::from_create_params(OrderId(1), request(Vec::new())).unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));
    }

    #[test]
    fn out_of_range_totals_are_validation_errors() {
        let err = Order::from_create_params(
            OrderId(1),
            request(vec![CartItem::new("gold", 2, Decimal::MAX)]),
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));

        let err = Order::from_create_params(
            OrderId(1),
            request(vec![
                CartItem::new("gold", 1, Decimal::MAX),
                CartItem::new("gold", 1, Decimal::MAX),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));
    }
}
