//! # Spares List
//!
//! > **A spare-parts request panel as a backend-agnostic component.**
//!
//! This crate implements the client-side logic of an inventory request screen:
//! it holds the list of product items available against a parent record (a
//! work-order line item), filters them by name, tracks per-item requested
//! quantities, validates and submits a request batch, and refreshes the list
//! on demand. Everything else, from fetching and persistence to access
//! control, lives behind two remote operations the component does not own.
//!
//! ## Core Concepts
//!
//! ### The two collaborators
//! The backend is reachable only through two operations, modelled as traits in
//! [`backend`]:
//! - [`backend::ItemSource`]: a query returning the current product items for
//!   a parent record.
//! - [`backend::RequestSink`]: a command accepting a batch of
//!   `product reference -> requested quantity` entries.
//!
//! Keeping these behind traits means the component can be driven end-to-end in
//! tests with [`backend::mock::MockBackend`] and no network at all.
//!
//! ### One list, derived views
//! [`list::ProductItemList`] owns a single `Vec` of items in backend return
//! order. The filtered view is recomputed from `(items, search_key)` on every
//! read instead of being kept as a second synchronized list, so an edit can
//! never be visible through one view and missing from the other.
//!
//! ### Fire-and-forget notifications
//! User-facing outcomes (submission success, validation failures, refresh
//! results) are emitted as [`notify::Notification`] events over a channel the
//! host consumes at its leisure. Delivery is best-effort; a dropped receiver
//! loses events silently.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```
//!
//! Set `RUST_LOG=spares_list=debug` and call [`lifecycle::setup_tracing`] to
//! see the component's structured logs.

pub mod backend;
pub mod lifecycle;
pub mod list;
pub mod model;
pub mod notify;
