//! Custom actions for the Catalog actor.
//!
//! The catalog is read-mostly: lookups, searches and filters run over
//! [`list`](actor_framework::ActorClient::list) snapshots in
//! [`CatalogClient`](crate::clients::CatalogClient). The only mutation is the
//! favourite toggle.

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Flips `is_favorite` on the first slot whose dish matches, ignoring case.
    ///
    /// Returns the updated restaurant.
    ToggleFavorite(String),
}
