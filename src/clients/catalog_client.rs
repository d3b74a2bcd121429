//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Restaurant` actor.
//! Lookups and searches are computed here from a `list` snapshot; the catalog
//! holds a handful of restaurants, so a scan per query is fine.
use crate::catalog_actor::{CatalogAction, CatalogError};
use crate::model::{Menu, MenuSlot, Restaurant, RestaurantCreate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Restaurant>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Restaurant> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CatalogError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(name)) => CatalogError::RestaurantNotFound(name),
            Err(FrameworkError::Conflict(name)) => CatalogError::DuplicateRestaurant(name),
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Adds a restaurant. Returns its name, which is its key.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register(&self, params: RestaurantCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Exact-name lookup.
    pub async fn find_restaurant(&self, name: &str) -> Result<Option<Restaurant>, CatalogError> {
        self.get(name.to_string()).await
    }

    /// Every restaurant, ascending by name.
    pub async fn all_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn menu(&self, name: &str) -> Result<Menu, CatalogError> {
        self.find_restaurant(name)
            .await?
            .map(|restaurant| restaurant.menu)
            .ok_or_else(|| CatalogError::RestaurantNotFound(name.to_string()))
    }

    /// Restaurants serving a dish whose name contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search_dish(&self, query: &str) -> Result<Vec<Restaurant>, CatalogError> {
        let mut restaurants = self.list().await?;
        restaurants.retain(|restaurant| restaurant.serves(query));
        debug!(found = restaurants.len(), "Search done");
        Ok(restaurants)
    }

    /// Every menu slot of the given category across the catalog.
    ///
    /// # Errors
    /// `CategoryNotFound` when no dish has that category.
    #[instrument(skip(self))]
    pub async fn dishes_by_category(&self, category: &str) -> Result<Vec<MenuSlot>, CatalogError> {
        let slots: Vec<MenuSlot> = self
            .list()
            .await?
            .iter()
            .flat_map(|restaurant| restaurant.menu.slots())
            .filter(|slot| slot.category.matches(category))
            .cloned()
            .collect();

        if slots.is_empty() {
            return Err(CatalogError::CategoryNotFound(category.to_string()));
        }
        Ok(slots)
    }

    /// Restaurants with at least one favourite dish.
    #[instrument(skip(self))]
    pub async fn favourites(&self) -> Result<Vec<Restaurant>, CatalogError> {
        let mut restaurants = self.list().await?;
        restaurants.retain(Restaurant::has_favourite);
        Ok(restaurants)
    }

    /// Flips the favourite flag of `dish` at `restaurant` and returns the
    /// updated restaurant.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(
        &self,
        restaurant: &str,
        dish: &str,
    ) -> Result<Restaurant, CatalogError> {
        debug!("Sending request");
        self.inner
            .perform_action(
                restaurant.to_string(),
                CatalogAction::ToggleFavorite(dish.to_string()),
            )
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, FoodCategory};
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn restaurant(name: &str, dishes: [(&str, FoodCategory, bool); 3]) -> Restaurant {
        let [breakfast, lunch, dinner] =
            dishes.map(|(dish, category, fav)| MenuSlot::new(dish, category, fav));
        Restaurant {
            name: name.to_string(),
            is_closed: false,
            address: Address::default(),
            menu: Menu {
                breakfast,
                lunch,
                dinner,
                deliver_from: 1000,
                deliver_till: 1600,
            },
        }
    }

    fn catalog() -> Vec<Restaurant> {
        vec![
            restaurant(
                "abc",
                [
                    ("apple", FoodCategory::Veg, false),
                    ("burger", FoodCategory::NonVeg, true),
                    ("pizza", FoodCategory::Veg, true),
                ],
            ),
            restaurant(
                "xyz",
                [
                    ("cereal", FoodCategory::Vegan, false),
                    ("salad", FoodCategory::Vegan, false),
                    ("soy", FoodCategory::Vegan, false),
                ],
            ),
        ]
    }

    #[tokio::test]
    async fn test_toggle_favorite_sends_the_dish() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let catalog_client = CatalogClient::new(client);

        let toggle_task =
            tokio::spawn(async move { catalog_client.toggle_favorite("abc", "Apple").await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "abc");
        let CatalogAction::ToggleFavorite(dish) = action;
        assert_eq!(dish, "Apple");

        let mut updated = catalog().remove(0);
        updated.menu.breakfast.is_favorite = true;
        responder.send(Ok(updated)).unwrap();

        let result = toggle_task.await.unwrap().unwrap();
        assert!(result.menu.breakfast.is_favorite);
    }

    #[tokio::test]
    async fn test_toggle_favorite_recovers_typed_errors() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_action("abc".to_string())
            .return_err(FrameworkError::EntityError(Box::new(
                CatalogError::DishNotFound {
                    restaurant: "abc".into(),
                    dish: "soy".into(),
                },
            )));
        mock.expect_action("nope".to_string())
            .return_err(FrameworkError::NotFound("nope".into()));

        let client = CatalogClient::new(mock.client());
        assert!(matches!(
            client.toggle_favorite("abc", "soy").await,
            Err(CatalogError::DishNotFound { .. })
        ));
        assert_eq!(
            client.toggle_favorite("nope", "soy").await,
            Err(CatalogError::RestaurantNotFound("nope".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_search_and_filters() {
        let mut mock = MockClient::<Restaurant>::new();
        for _ in 0..4 {
            mock.expect_list().return_ok(catalog());
        }
        let client = CatalogClient::new(mock.client());

        let found = client.search_dish("SAL").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "xyz");

        let vegan = client.dishes_by_category("VEGAN").await.unwrap();
        let dishes: Vec<_> = vegan.iter().map(|slot| slot.dish.as_str()).collect();
        assert_eq!(dishes, vec!["cereal", "salad", "soy"]);

        assert_eq!(
            client.dishes_by_category("keto").await,
            Err(CatalogError::CategoryNotFound("keto".into()))
        );

        let favourites = client.favourites().await.unwrap();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites[0].name, "abc");

        mock.verify();
    }

    #[tokio::test]
    async fn test_menu_of_unknown_restaurant() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_get("nope".to_string()).return_ok(None);

        let client = CatalogClient::new(mock.client());
        assert_eq!(
            client.menu("nope").await,
            Err(CatalogError::RestaurantNotFound("nope".into()))
        );
    }
}
