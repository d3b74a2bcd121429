//! Custom actions for the Courier actor.
//!
//! Both actions return the courier as it is after the change.

/// Custom actions for Courier entities.
#[derive(Debug, Clone)]
pub enum CourierAction {
    /// Marks an available courier as busy.
    ///
    /// Sent with `perform_action_any`: the actor picks the available courier
    /// with the lowest id.
    Allocate,
    /// Returns a busy courier to the pool.
    CompleteDelivery,
}
