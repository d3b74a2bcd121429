use super::{Config, Seed, SeedError};
use crate::catalog_actor::CatalogError;
use crate::clients::{CartClient, CatalogClient, CourierClient, OrderClient};
use crate::courier_actor::CourierError;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to load couriers: {0}")]
    Courier(#[from] CourierError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator for the food-ordering actors.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: The Order actor runs with the Catalog and Courier clients
/// - **Seeding**: Registering the initial restaurants and couriers
///
/// # Architecture
///
/// - **Catalog Actor**: restaurants and menus, favourite toggle
/// - **Cart Actor**: one cart per user
/// - **Courier Actor**: the courier pool, with exclusive allocation
/// - **Order Actor**: the order ledger; resolves the restaurant and allocates a
///   courier while creating each order
///
/// # Example
///
/// ```rust
/// use food_order::lifecycle::{Config, OrderSystem, Seed};
/// use food_order::model::{CartItem, OrderRequest};
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::start(&Config::default(), Seed::builtin()).await?;
///
///     let order_id = system
///         .order_client
///         .place_order(OrderRequest {
///             restaurant_name: "abc".into(),
///             items: vec![CartItem::new("apple", 2, Decimal::new(599, 2))],
///         })
///         .await?;
///     assert_eq!(order_id.to_string(), "ORDER-1");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Catalog actor
    pub catalog_client: CatalogClient,

    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Client for interacting with the Courier actor
    pub courier_client: CourierClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns all actors, wires the Order actor's dependencies and loads `seed`.
    ///
    /// # Errors
    ///
    /// Fails if a seed entry is rejected (duplicate restaurant name or courier id,
    /// courier id 0, blank restaurant name).
    pub async fn start(config: &Config, seed: Seed) -> Result<Self, SystemError> {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(capacity);
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);
        let (courier_actor, courier_client) = crate::courier_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        // Order actor needs Catalog and Courier clients (Context = (CatalogClient, CourierClient))
        let handles = vec![
            tokio::spawn(order_actor.run((catalog_client.clone(), courier_client.clone()))),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(courier_actor.run(())),
        ];

        let system = Self {
            catalog_client,
            cart_client,
            courier_client,
            order_client,
            handles,
        };

        // 3. Seed
        system.load(seed).await?;
        info!(capacity, "System started");
        Ok(system)
    }

    async fn load(&self, seed: Seed) -> Result<(), SystemError> {
        let restaurants = seed.restaurants.len();
        let couriers = seed.couriers.len();

        for restaurant in seed.restaurants {
            self.catalog_client.register(restaurant).await?;
        }
        for courier in seed.couriers {
            self.courier_client.register(courier).await?;
        }

        info!(restaurants, couriers, "Seed loaded");
        Ok(())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains its
    /// mailbox and exits. The Order actor holds clones of the Catalog and Courier
    /// clients, so those two actors stop once the Order actor has stopped. Clones
    /// of the clients held elsewhere keep their actors alive, and this method
    /// waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.catalog_client);
        drop(self.courier_client);

        // Every task is awaited; the first failure is reported afterwards
        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                first_failure.get_or_insert(SystemError::ActorTask(e.to_string()));
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => {
                info!("System shutdown complete.");
                Ok(())
            }
        }
    }
}
