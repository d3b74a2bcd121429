//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; the orchestration itself (restaurant
//! lookup, courier allocation) happens in the Order actor's `on_create` hook.
use crate::model::{Order, OrderId, OrderRequest, OrderStatusView};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns its id.
    ///
    /// All or nothing: on any error no order is recorded, no id is used up and
    /// no courier is taken.
    #[instrument(skip(self, request), fields(restaurant = %request.restaurant_name, items = request.items.len()))]
    pub async fn place_order(&self, request: OrderRequest) -> Result<OrderId, OrderError> {
        debug!(?request, "place_order called");
        info!("Sending place_order to actor");
        self.inner.create(request).await.map_err(Self::map_error)
    }

    /// Status of the order with id `ORDER-<n>`.
    ///
    /// The status is derived from the courier binding, see
    /// [`Order::delivery_status`].
    #[instrument(skip(self))]
    pub async fn order_status(&self, order_id: &str) -> Result<OrderStatusView, OrderError> {
        let id: OrderId = order_id
            .parse()
            .map_err(|_| OrderError::OrderNotFound(order_id.to_string()))?;
        self.get(id)
            .await?
            .map(|order| order.status_view())
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// The whole ledger, in creation order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::OrderNotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartItem, Courier, CourierId, DeliveryStatus, Restaurant};
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_place_order_recovers_exhaustion() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let place_task = tokio::spawn(async move {
            order_client
                .place_order(OrderRequest {
                    restaurant_name: "abc".into(),
                    items: vec![CartItem::new("apple", 2, Decimal::new(599, 2))],
                })
                .await
        });

        let (request, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(request.restaurant_name, "abc");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::NoCourierAvailable,
            ))))
            .unwrap();

        assert_eq!(place_task.await.unwrap(), Err(OrderError::NoCourierAvailable));
    }

    #[tokio::test]
    async fn test_order_status_parses_the_id() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1)).return_ok(Some(Order {
            id: OrderId(1),
            restaurant: Restaurant::default(),
            items: vec![CartItem::new("apple", 2, Decimal::new(599, 2))],
            total: Decimal::new(1198, 2),
            status: DeliveryStatus::OutForDelivery,
            courier: Courier::new(CourierId(1), "John Doe", "123-456-7890"),
        }));
        mock.expect_get(OrderId(7)).return_ok(None);

        let client = OrderClient::new(mock.client());
        let view = client.order_status("ORDER-1").await.unwrap();
        assert_eq!(view.status, DeliveryStatus::OutForDelivery);
        assert_eq!(view.total, Decimal::new(1198, 2));
        assert_eq!(view.courier_name, "John Doe");

        assert_eq!(
            client.order_status("ORDER-7").await,
            Err(OrderError::OrderNotFound("ORDER-7".into()))
        );
        // Never reaches the actor
        assert_eq!(
            client.order_status("7").await,
            Err(OrderError::OrderNotFound("7".into()))
        );
        mock.verify();
    }
}
