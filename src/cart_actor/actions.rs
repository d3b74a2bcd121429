//! Custom actions for the Cart actor.

use crate::model::CartItem;

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Appends an item and returns the updated cart.
    ///
    /// # Errors
    /// Fails with `InvalidItem` if the quantity is zero or the price negative;
    /// the cart is left untouched.
    AddItem(CartItem),
}
