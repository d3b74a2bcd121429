//! # Courier Client
//!
//! Provides a high‑level API for interacting with the `Courier` actor.
use crate::courier_actor::{CourierAction, CourierError};
use crate::model::{Courier, CourierCreate, CourierId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Courier actor.
#[derive(Clone)]
pub struct CourierClient {
    inner: ResourceClient<Courier>,
}

impl CourierClient {
    pub fn new(inner: ResourceClient<Courier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Courier> for CourierClient {
    type Error = CourierError;

    fn inner(&self) -> &ResourceClient<Courier> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CourierError>() {
            Ok(err) => err,
            Err(FrameworkError::Conflict(id)) => CourierError::DuplicateCourier(id),
            Err(other) => CourierError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CourierClient {
    #[instrument(skip(self))]
    pub async fn register(&self, params: CourierCreate) -> Result<CourierId, CourierError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Takes the available courier with the lowest id out of the pool.
    ///
    /// Returns `None`, without changing anything, when every courier is busy.
    #[instrument(skip(self))]
    pub async fn allocate_any(&self) -> Result<Option<Courier>, CourierError> {
        let allocated = self
            .inner
            .perform_action_any(CourierAction::Allocate)
            .await
            .map_err(Self::map_error)?;

        match &allocated {
            Some((id, _)) => info!(courier_id = %id, "Allocated"),
            None => info!("Pool exhausted"),
        }
        Ok(allocated.map(|(_, courier)| courier))
    }

    /// Returns a busy courier to the pool.
    #[instrument(skip(self))]
    pub async fn complete_delivery(&self, id: CourierId) -> Result<Courier, CourierError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CourierAction::CompleteDelivery)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => CourierError::CourierNotFound(id),
                other => Self::map_error(other),
            })
    }

    /// Every courier, ascending by id.
    pub async fn roster(&self) -> Result<Vec<Courier>, CourierError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    fn courier(id: u32, is_available: bool) -> Courier {
        Courier {
            is_available,
            ..Courier::new(CourierId(id), "Jane Smith", "987-654-3210")
        }
    }

    #[tokio::test]
    async fn test_allocate_any_unwraps_the_courier() {
        let mut mock = MockClient::<Courier>::new();
        mock.expect_action_any()
            .return_ok(Some((CourierId(2), courier(2, false))));
        mock.expect_action_any().return_ok(None);

        let client = CourierClient::new(mock.client());
        let allocated = client.allocate_any().await.unwrap().unwrap();
        assert_eq!(allocated.id, CourierId(2));
        assert!(!allocated.is_available);

        assert_eq!(client.allocate_any().await, Ok(None));
        mock.verify();
    }

    #[tokio::test]
    async fn test_complete_delivery_errors() {
        let mut mock = MockClient::<Courier>::new();
        mock.expect_action(CourierId(9))
            .return_err(FrameworkError::NotFound(CourierId(9).to_string()));
        mock.expect_action(CourierId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                CourierError::NotAllocated(CourierId(1)),
            )));
        mock.expect_action(CourierId(1))
            .return_err(FrameworkError::ActorClosed);

        let client = CourierClient::new(mock.client());
        assert_eq!(
            client.complete_delivery(CourierId(9)).await,
            Err(CourierError::CourierNotFound(CourierId(9)))
        );
        assert_eq!(
            client.complete_delivery(CourierId(1)).await,
            Err(CourierError::NotAllocated(CourierId(1)))
        );
        assert!(matches!(
            client.complete_delivery(CourierId(1)).await,
            Err(CourierError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_register_conflict_is_a_duplicate() {
        let mut mock = MockClient::<Courier>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict(CourierId(1).to_string()));

        let client = CourierClient::new(mock.client());
        let err = client
            .register(CourierCreate {
                id: 1,
                name: "John Doe".into(),
                phone: "123-456-7890".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CourierError::DuplicateCourier("courier_1".into()));
    }
}
