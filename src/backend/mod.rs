//! # External Collaborators
//!
//! The backend is reachable only through two named remote operations, modelled
//! here as traits:
//!
//! - [`ItemSource`]: the query half. Given a parent record identifier, it
//!   returns the current product items or fails.
//! - [`RequestSink`]: the command half. It accepts a request batch for a
//!   parent record and either succeeds or fails.
//!
//! # Architecture Note
//! Why traits instead of concrete clients?
//! The component ([`crate::list::ProductItemList`]) owns no transport: the
//! host environment decides whether these calls go over HTTP, a message bus,
//! or an in-process stub. Putting the seam here means the whole component can
//! be exercised in tests with [`mock::MockBackend`] and deterministic
//! responses.
//!
//! Both traits are `#[async_trait]` because every real implementation is a
//! network round trip, and both take `&self` so a single shared handle can
//! serve the component for its whole lifetime.

pub mod mock;

use crate::model::{ItemRecord, RequestBatch};
use async_trait::async_trait;
use thiserror::Error;

/// Failure shapes of the two remote operations.
///
/// The backend's own error detail is opaque to this component; it is carried
/// as a string and surfaced to the user verbatim or stored for inspection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The item query failed.
    #[error("item query failed: {0}")]
    Query(String),

    /// The request command was rejected or failed.
    #[error("request command failed: {0}")]
    Command(String),

    /// The backend could not be reached at all.
    #[error("backend unavailable")]
    Unavailable,
}

/// The external query operation: current product items for a parent record.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Returns the items in backend order. The component treats the returned
    /// order as canonical.
    async fn fetch_items(&self, parent_id: &str) -> Result<Vec<ItemRecord>, BackendError>;
}

/// The external command operation: submit a request batch.
#[async_trait]
pub trait RequestSink: Send + Sync {
    /// Submits the batch scoped to `parent_id`. No response payload is
    /// consumed beyond success or failure.
    async fn request_items(&self, batch: &RequestBatch, parent_id: &str)
        -> Result<(), BackendError>;
}
