//! A restaurant in the catalog, with its fixed three-slot menu.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for details on:
//! - Creation parameters ([`RestaurantCreate`])
//! - Custom actions ([`CatalogAction`](crate::catalog_actor::CatalogAction))

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Dietary category of a dish.
///
/// Parsing is case-insensitive; anything that is not one of the known
/// categories is kept verbatim in [`FoodCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoodCategory {
    Veg,
    NonVeg,
    Vegan,
    Other(String),
}

impl FoodCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FoodCategory::Veg => "veg",
            FoodCategory::NonVeg => "non-veg",
            FoodCategory::Vegan => "vegan",
            FoodCategory::Other(other) => other,
        }
    }

    /// Case-insensitive comparison against a category name.
    pub fn matches(&self, name: &str) -> bool {
        eq_folded(self.as_str(), name.trim())
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        FoodCategory::Other(String::new())
    }
}

impl FromStr for FoodCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_lowercase().as_str() {
            "veg" => FoodCategory::Veg,
            "non-veg" => FoodCategory::NonVeg,
            "vegan" => FoodCategory::Vegan,
            _ => FoodCategory::Other(s.trim().to_string()),
        };
        Ok(category)
    }
}

impl From<String> for FoodCategory {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<FoodCategory> for String {
    fn from(category: FoodCategory) -> Self {
        category.as_str().to_string()
    }
}

impl Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish on a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSlot {
    pub dish: String,
    pub category: FoodCategory,
    #[serde(default)]
    pub is_favorite: bool,
}

impl MenuSlot {
    pub fn new(dish: impl Into<String>, category: FoodCategory, is_favorite: bool) -> Self {
        Self {
            dish: dish.into(),
            category,
            is_favorite,
        }
    }
}

/// Unicode case-insensitive equality.
fn eq_folded(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A restaurant's menu: exactly three slots plus the delivery window.
///
/// `deliver_from` / `deliver_till` are `HHMM` clock times and purely informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub breakfast: MenuSlot,
    pub lunch: MenuSlot,
    pub dinner: MenuSlot,
    pub deliver_from: u16,
    pub deliver_till: u16,
}

impl Menu {
    /// The slots in scan order: breakfast, lunch, dinner.
    pub fn slots(&self) -> [&MenuSlot; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    /// First slot, in scan order, whose dish matches `dish` case-insensitively.
    pub fn slot_mut(&mut self, dish: &str) -> Option<&mut MenuSlot> {
        [&mut self.breakfast, &mut self.lunch, &mut self.dinner]
            .into_iter()
            .find(|slot| eq_folded(&slot.dish, dish))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub is_closed: bool,
    pub address: Address,
    pub menu: Menu,
}

impl Restaurant {
    /// True if any dish name contains `query`, ignoring case.
    pub fn serves(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.menu
            .slots()
            .iter()
            .any(|slot| slot.dish.to_lowercase().contains(&query))
    }

    pub fn has_favourite(&self) -> bool {
        self.menu.slots().iter().any(|slot| slot.is_favorite)
    }
}

/// Payload for registering a restaurant in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(default)]
    pub is_closed: bool,
    pub address: Address,
    pub menu: Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu {
            breakfast: MenuSlot::new("Apple", FoodCategory::Veg, false),
            lunch: MenuSlot::new("burger", FoodCategory::NonVeg, true),
            dinner: MenuSlot::new("apple", FoodCategory::Veg, false),
            deliver_from: 1000,
            deliver_till: 1600,
        }
    }

    #[test]
    fn category_parsing_ignores_case() {
        assert_eq!("NON-VEG".parse::<FoodCategory>().unwrap(), FoodCategory::NonVeg);
        assert_eq!(
            "Keto".parse::<FoodCategory>().unwrap(),
            FoodCategory::Other("Keto".into())
        );
        assert!(FoodCategory::Vegan.matches(" VeGaN "));
        assert!(FoodCategory::Other("Keto".into()).matches("keto"));
    }

    #[test]
    fn category_serializes_as_its_name() {
        let json = serde_json::to_string(&FoodCategory::NonVeg).unwrap();
        assert_eq!(json, "\"non-veg\"");
        let back: FoodCategory = serde_json::from_str("\"Veg\"").unwrap();
        assert_eq!(back, FoodCategory::Veg);
    }

    #[test]
    fn slot_lookup_takes_the_first_match_in_scan_order() {
        let mut menu = menu();
        menu.slot_mut("APPLE").unwrap().is_favorite = true;
        assert!(menu.breakfast.is_favorite);
        assert!(!menu.dinner.is_favorite);
        assert!(menu.slot_mut("pizza").is_none());
    }

    #[test]
    fn lookups_fold_non_ascii_case() {
        let mut menu = menu();
        menu.lunch.dish = "Crème Brûlée".into();
        menu.slot_mut("CRÈME BRÛLÉE").unwrap().is_favorite = true;
        assert!(menu.lunch.is_favorite);

        assert!(FoodCategory::Other("Végétalien".into()).matches("VÉGÉTALIEN"));
    }

    #[test]
    fn serves_matches_substrings() {
        let restaurant = Restaurant {
            name: "abc".into(),
            menu: menu(),
            ..Default::default()
        };
        assert!(restaurant.serves("URG"));
        assert!(!restaurant.serves("pizza"));
        assert!(restaurant.has_favourite());
    }
}
