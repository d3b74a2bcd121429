//! Error taxonomy shared by the domain actors.
//!
//! Each actor has its own error enum (`CatalogError`, `CartError`, `CourierError`,
//! `OrderError`). A routing layer that only needs the broad class of a failure
//! (to pick a status code, say) asks for its [`ErrorKind`].

use std::fmt::Display;

/// Broad class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input, such as a zero quantity or an empty order.
    Validation,
    /// Restaurant, dish, courier or order does not exist.
    NotFound,
    /// No courier is available.
    ResourceExhausted,
    /// Duplicate registration, or a state transition that does not apply.
    Conflict,
    /// An actor could not be reached.
    Unavailable,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not found",
            ErrorKind::ResourceExhausted => "resource exhausted",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

/// Implemented by every domain error.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
