//! Custom actions for the Order actor.
//!
//! The ledger is append-only: orders are created and read, never changed, so
//! there are no actions.

#[derive(Debug, Clone)]
pub enum OrderAction {}
