//! Runtime configuration, read from environment variables.

use std::path::PathBuf;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for [`OrderSystem`](super::OrderSystem), read from the environment.
///
/// | Variable | Default |
/// |----------|---------|
/// | `FOOD_ORDER_CHANNEL_CAPACITY` | `32` |
/// | `FOOD_ORDER_LOG` | `info` (overridden by `RUST_LOG`) |
/// | `FOOD_ORDER_SEED` | unset: built-in catalog and couriers |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Mailbox size of every actor.
    pub channel_capacity: usize,
    /// Default `tracing` filter directive.
    pub log_filter: String,
    /// JSON seed file to load instead of the built-in data.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], with variables looked up through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            channel_capacity: var("FOOD_ORDER_CHANNEL_CAPACITY")
                .and_then(|c| c.parse().ok())
                .filter(|&c| c > 0)
                .unwrap_or(DEFAULT_CHANNEL_CAPACITY),
            log_filter: var("FOOD_ORDER_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            seed_path: var("FOOD_ORDER_SEED").map(PathBuf::from),
        }
    }
}
