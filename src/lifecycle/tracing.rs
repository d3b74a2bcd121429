//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The compact format hides the module path (`with_target(false)`); actors log an
//! `entity_type` field instead, so a line reads
//! `INFO Created entity_type="Order" id=ORDER-1 size=1`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the final store size
//! - **Entity Operations**: Create, Get, List, Action and ActionAny
//! - **Request Flow**: client methods are `#[instrument]`ed, so actor logs nest
//!   under spans such as `order_processing:place_order`
//! - **Errors**: the failing entity's id and the error
//!
//! ## Levels
//!
//! `FOOD_ORDER_LOG` sets the default filter; `RUST_LOG`, when set, wins.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `debug`, the order flow reads:
//!
//! ```text
//! DEBUG place_order called request=OrderRequest { restaurant_name: "abc", items: [..] }
//! DEBUG Create entity_type="Order" params=OrderRequest { .. }
//! DEBUG Resolving restaurant order_id=ORDER-1 restaurant=abc
//! DEBUG Get entity_type="Restaurant" id=abc found=true
//! DEBUG ActionAny entity_type="Courier" action=Allocate
//! INFO Action ok entity_type="Courier" id=courier_1
//! INFO Courier allocated order_id=ORDER-1 courier_id=courier_1
//! INFO Created entity_type="Order" id=ORDER-1 size=1
//! ```

use super::Config;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
