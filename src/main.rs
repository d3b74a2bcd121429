//! Demonstration run of the food-ordering system.
//!
//! 1. Starts the [`OrderSystem`] from the environment's [`Config`] and [`Seed`].
//! 2. Fills a cart from a restaurant's menu.
//! 3. Places orders until the courier pool runs out.
//! 4. Queries a status, returns a courier, toggles a favourite.

use actor_framework::ActorClient;
use food_order::error::Classify;
use food_order::lifecycle::{setup_tracing, Config, OrderSystem, Seed};
use food_order::model::{CartItem, OrderRequest, UserId};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    setup_tracing(&config);

    info!(?config, "Starting food ordering system");
    let seed = Seed::load(&config)?;
    let system = OrderSystem::start(&config, seed).await?;

    // Fill a cart from the first restaurant's menu
    let restaurants = system.catalog_client.all_restaurants().await?;
    let Some(restaurant) = restaurants.first() else {
        warn!("Catalog is empty, nothing to order");
        system.shutdown().await?;
        return Ok(());
    };

    let user = UserId::from("u1");
    let span = tracing::info_span!("cart", user = %user);
    let cart = async {
        let menu = &restaurant.menu;
        system
            .cart_client
            .add_to_cart(user.clone(), CartItem::new(&menu.lunch.dish, 2, Decimal::new(1099, 2)))
            .await?;
        system
            .cart_client
            .add_to_cart(user.clone(), CartItem::new(&menu.dinner.dish, 1, Decimal::new(799, 2)))
            .await?;
        system.cart_client.view_cart(user.clone()).await
    }
    .instrument(span)
    .await?;
    info!(items = cart.items().len(), total = %cart.total(), "Cart ready");

    // Order the cart's contents until no courier is left
    let couriers = system.courier_client.roster().await?.len();
    let mut placed = Vec::new();
    for attempt in 1..=couriers + 1 {
        let span = tracing::info_span!("order_processing", attempt);
        let request = OrderRequest {
            restaurant_name: restaurant.name.clone(),
            items: cart.items().to_vec(),
        };
        match system
            .order_client
            .place_order(request)
            .instrument(span)
            .await
        {
            Ok(order_id) => {
                info!(%order_id, "Order placed");
                placed.push(order_id);
            }
            Err(e) => error!(error = %e, kind = %e.kind(), "Order rejected"),
        }
    }

    if let Some(order_id) = placed.first() {
        let status = system.order_client.order_status(&order_id.to_string()).await?;
        info!(
            %order_id,
            status = %status.status,
            total = %status.total,
            courier = %status.courier_name,
            phone = %status.courier_phone,
            "Order status"
        );

        let order = system.order_client.get(*order_id).await?;
        if let Some(order) = order {
            let courier = system.courier_client.complete_delivery(order.courier.id).await?;
            info!(courier_id = %courier.id, "Delivery completed, courier back in the pool");
        }
    }

    let updated = system
        .catalog_client
        .toggle_favorite(&restaurant.name, &restaurant.menu.breakfast.dish)
        .await?;
    info!(
        restaurant = %updated.name,
        dish = %updated.menu.breakfast.dish,
        favourite = updated.menu.breakfast.is_favorite,
        "Favourite toggled"
    );

    let ledger = system.order_client.list_orders().await?;
    info!(orders = ledger.len(), "Ledger");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
