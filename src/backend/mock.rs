//! # Mock Backend
//!
//! Utilities for testing the list component in isolation.
//!
//! [`MockBackend`] implements both [`ItemSource`] and [`RequestSink`] against
//! a queue of expectations, so a test can script the backend's behavior
//! (success, failure, specific payloads) deterministically:
//!
//! ```ignore
//! let mut mock = MockBackend::new();
//! mock.expect_fetch("wo_1").return_ok(vec![record]);
//! mock.expect_request().return_ok();
//!
//! let mut list = ProductItemList::new(mock.clone(), mock.clone(), notifier);
//! // Drive the component...
//! mock.verify(); // Ensures all expectations were consumed
//! ```
//!
//! Every batch handed to the sink is recorded and available through
//! [`MockBackend::sink_calls`], which is how tests assert that an aborted
//! submission performed *zero* sink invocations.

use crate::backend::{BackendError, ItemSource, RequestSink};
use crate::model::{ItemRecord, RequestBatch};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted response for one backend call.
enum Expectation {
    Fetch {
        parent_id: String,
        response: Result<Vec<ItemRecord>, BackendError>,
    },
    Request {
        response: Result<(), BackendError>,
    },
}

#[derive(Default)]
struct Inner {
    expectations: VecDeque<Expectation>,
    sink_calls: Vec<(RequestBatch, String)>,
}

/// A backend double with expectation tracking for fluent testing.
///
/// Cloning is cheap and clones share the same expectation queue, so the same
/// mock can be handed to the component as both its source and its sink.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_items` call for the given parent record.
    pub fn expect_fetch(&mut self, parent_id: impl Into<String>) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            parent_id: parent_id.into(),
            inner: self.inner.clone(),
        }
    }

    /// Expects a `request_items` call.
    pub fn expect_request(&mut self) -> RequestExpectationBuilder {
        RequestExpectationBuilder {
            inner: self.inner.clone(),
        }
    }

    /// Every `(batch, parent_id)` the sink has received, in call order.
    pub fn sink_calls(&self) -> Vec<(RequestBatch, String)> {
        self.inner.lock().unwrap().sink_calls.clone()
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let inner = self.inner.lock().unwrap();
        if !inner.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                inner.expectations.len()
            );
        }
    }
}

#[async_trait]
impl ItemSource for MockBackend {
    async fn fetch_items(&self, parent_id: &str) -> Result<Vec<ItemRecord>, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.expectations.pop_front() {
            Some(Expectation::Fetch {
                parent_id: expected,
                response,
            }) => {
                assert_eq!(parent_id, expected, "fetch_items called with wrong parent id");
                response
            }
            _ => panic!("Unexpected fetch_items call or expectation mismatch"),
        }
    }
}

#[async_trait]
impl RequestSink for MockBackend {
    async fn request_items(
        &self,
        batch: &RequestBatch,
        parent_id: &str,
    ) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.sink_calls.push((batch.clone(), parent_id.to_owned()));
        match inner.expectations.pop_front() {
            Some(Expectation::Request { response }) => response,
            _ => panic!("Unexpected request_items call or expectation mismatch"),
        }
    }
}

/// Builder for `fetch_items` expectations.
pub struct FetchExpectationBuilder {
    parent_id: String,
    inner: Arc<Mutex<Inner>>,
}

impl FetchExpectationBuilder {
    /// Sets the expectation to return the given records.
    pub fn return_ok(self, records: Vec<ItemRecord>) {
        self.inner
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::Fetch {
                parent_id: self.parent_id,
                response: Ok(records),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: BackendError) {
        self.inner
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::Fetch {
                parent_id: self.parent_id,
                response: Err(error),
            });
    }
}

/// Builder for `request_items` expectations.
pub struct RequestExpectationBuilder {
    inner: Arc<Mutex<Inner>>,
}

impl RequestExpectationBuilder {
    /// Sets the expectation to accept the batch.
    pub fn return_ok(self) {
        self.inner
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::Request { response: Ok(()) });
    }

    /// Sets the expectation to reject the batch.
    pub fn return_err(self, error: BackendError) {
        self.inner
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::Request {
                response: Err(error),
            });
    }
}
