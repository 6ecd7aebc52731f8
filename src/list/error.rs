//! Error types for the list component.

use crate::backend::BackendError;
use thiserror::Error;

/// One item whose requested quantity exceeds its quantity on hand.
///
/// The `Display` text is what the user sees, one notification per violation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Requested quantity for {name} exceeds quantity on hand")]
pub struct QuantityViolation {
    pub id: String,
    pub name: String,
    pub requested: u32,
    pub on_hand: u32,
}

/// Errors that can abort a submission or a refresh.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// At least one item asked for more than is on hand. Nothing was sent.
    #[error("requested quantity exceeds quantity on hand for {} item(s)", .0.len())]
    Validation(Vec<QuantityViolation>),

    /// Every requested quantity was zero. Nothing was sent.
    #[error("no items requested")]
    NothingRequested,

    /// The operation needs a prior successful `load` to know its parent
    /// record.
    #[error("no list has been loaded yet")]
    NotLoaded,

    /// The backend call itself failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
