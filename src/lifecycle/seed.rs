//! Initial catalog and courier pool.
//!
//! A seed is either the built-in data or a JSON file:
//!
//! ```json
//! {
//!   "restaurants": [
//!     {
//!       "name": "abc",
//!       "is_closed": false,
//!       "address": { "street": "street1", "city": "city1" },
//!       "menu": {
//!         "breakfast": { "dish": "apple", "category": "veg", "is_favorite": false },
//!         "lunch": { "dish": "burger", "category": "non-veg", "is_favorite": true },
//!         "dinner": { "dish": "pizza", "category": "veg", "is_favorite": true },
//!         "deliver_from": 1000,
//!         "deliver_till": 1600
//!       }
//!     }
//!   ],
//!   "couriers": [{ "id": 1, "name": "John Doe", "phone": "123-456-7890" }]
//! }
//! ```

use super::Config;
use crate::model::{Address, CourierCreate, FoodCategory, Menu, MenuSlot, RestaurantCreate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub restaurants: Vec<RestaurantCreate>,
    #[serde(default)]
    pub couriers: Vec<CourierCreate>,
}

impl Seed {
    /// The file named by `config.seed_path`, or the built-in data.
    pub fn load(config: &Config) -> Result<Self, SeedError> {
        match &config.seed_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Seed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            restaurants = seed.restaurants.len(),
            couriers = seed.couriers.len(),
            "Seed file loaded"
        );
        Ok(seed)
    }

    /// Restaurants `abc` (open) and `xyz` (closed), couriers 1 and 2.
    pub fn builtin() -> Self {
        Self {
            restaurants: vec![
                RestaurantCreate {
                    name: "abc".to_string(),
                    is_closed: false,
                    address: Address {
                        street: "street1".to_string(),
                        city: "city1".to_string(),
                    },
                    menu: Menu {
                        breakfast: MenuSlot::new("apple", FoodCategory::Veg, false),
                        lunch: MenuSlot::new("burger", FoodCategory::NonVeg, true),
                        dinner: MenuSlot::new("pizza", FoodCategory::Veg, true),
                        deliver_from: 1000,
                        deliver_till: 1600,
                    },
                },
                RestaurantCreate {
                    name: "xyz".to_string(),
                    is_closed: true,
                    address: Address {
                        street: "street2".to_string(),
                        city: "city2".to_string(),
                    },
                    menu: Menu {
                        breakfast: MenuSlot::new("cereal", FoodCategory::Vegan, false),
                        lunch: MenuSlot::new("salad", FoodCategory::Vegan, false),
                        dinner: MenuSlot::new("soy", FoodCategory::Vegan, false),
                        deliver_from: 1300,
                        deliver_till: 1900,
                    },
                },
            ],
            couriers: vec![
                CourierCreate {
                    id: 1,
                    name: "John Doe".to_string(),
                    phone: "123-456-7890".to_string(),
                },
                CourierCreate {
                    id: 2,
                    name: "Jane Smith".to_string(),
                    phone: "987-654-3210".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_without_a_path_is_builtin() {
        let seed = Seed::load(&Config::default()).unwrap();
        let names: Vec<_> = seed.restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["abc", "xyz"]);
        assert_eq!(seed.couriers.len(), 2);
    }

    #[test]
    fn reads_a_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "restaurants": [{{
                    "name": "Dosa Hut",
                    "address": {{ "street": "1 Main", "city": "Pune" }},
                    "menu": {{
                        "breakfast": {{ "dish": "idli", "category": "VEG" }},
                        "lunch": {{ "dish": "dosa", "category": "veg", "is_favorite": true }},
                        "dinner": {{ "dish": "kebab", "category": "halal" }},
                        "deliver_from": 800,
                        "deliver_till": 2200
                    }}
                }}],
                "couriers": [{{ "id": 7, "name": "Ravi", "phone": "555" }}]
            }}"#
        )
        .unwrap();

        let config = Config {
            seed_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let seed = Seed::load(&config).unwrap();

        let dosa_hut = &seed.restaurants[0];
        assert!(!dosa_hut.is_closed);
        assert_eq!(dosa_hut.menu.breakfast.category, FoodCategory::Veg);
        assert!(!dosa_hut.menu.breakfast.is_favorite);
        assert!(dosa_hut.menu.lunch.is_favorite);
        assert_eq!(
            dosa_hut.menu.dinner.category,
            FoodCategory::Other("halal".into())
        );
        assert_eq!(seed.couriers[0].id, 7);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Seed::from_file(&missing),
            Err(SeedError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Seed::from_file(&broken),
            Err(SeedError::Parse { .. })
        ));
    }
}
