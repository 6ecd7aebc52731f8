//! # Product Item List
//!
//! The component itself: holds the current item list for one parent record,
//! filters it by name, tracks per-item requested quantities, and forwards a
//! validated request batch to the backend.
//!
//! ## State Model
//!
//! There is exactly one source of truth, `items`, kept in backend return
//! order. The filtered view is derived from `(items, search_key)` on every
//! call to [`ProductItemList::filtered_items`], so edits are visible through
//! the full and the filtered view by construction, with no second list to
//! keep in sync.
//!
//! ## Concurrency Model
//!
//! Every operation takes `&mut self` and awaits at most one backend call, so
//! operations are serialized by ownership: there is no interleaving, no
//! partial update, and no need for locks. There is also no client-side
//! timeout, retry, or cancellation; a failed operation is terminal and the
//! user decides what to do next.

pub mod batch;
pub mod error;

use crate::backend::{BackendError, ItemSource, RequestSink};
use crate::model::{ItemRecord, ProductItem};
use crate::notify::{Notification, Notifier};
use error::RequestError;
use tracing::{debug, info, instrument, warn};

/// Client-side state for a spare-parts request panel, generic over the two
/// backend collaborators.
pub struct ProductItemList<S, K> {
    source: S,
    sink: K,
    notifier: Notifier,
    items: Vec<ProductItem>,
    search_key: String,
    // The "refresh handle": the parameters of the last issued query, so
    // refresh() can reissue it without being handed the parent id again.
    last_parent_id: Option<String>,
    last_error: Option<BackendError>,
}

impl<S: ItemSource, K: RequestSink> ProductItemList<S, K> {
    pub fn new(source: S, sink: K, notifier: Notifier) -> Self {
        Self {
            source,
            sink,
            notifier,
            items: Vec::new(),
            search_key: String::new(),
            last_parent_id: None,
            last_error: None,
        }
    }

    /// The full list, in backend return order.
    pub fn items(&self) -> &[ProductItem] {
        &self.items
    }

    /// The filtered view: items whose name contains the current search key,
    /// case-insensitively, in list order. An empty key yields the full list.
    pub fn filtered_items(&self) -> Vec<&ProductItem> {
        if self.search_key.is_empty() {
            self.items.iter().collect()
        } else {
            self.items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&self.search_key))
                .collect()
        }
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// The most recent backend failure, if any. A successful load clears it.
    pub fn last_error(&self) -> Option<&BackendError> {
        self.last_error.as_ref()
    }

    /// Fetches the item list for `parent_id` and replaces all local state
    /// with zero-quantity copies of the returned records.
    ///
    /// On failure the error is stored and the list cleared; no notification
    /// is emitted for load failures; only submit and refresh announce their
    /// outcome. The asymmetry is carried over from the original behavior,
    /// pending product-owner confirmation.
    #[instrument(skip(self))]
    pub async fn load(&mut self, parent_id: &str) -> Result<(), BackendError> {
        debug!("loading product items");
        self.last_parent_id = Some(parent_id.to_owned());
        match self.source.fetch_items(parent_id).await {
            Ok(records) => {
                self.apply_records(records);
                Ok(())
            }
            Err(error) => {
                warn!(%error, "load failed");
                self.items.clear();
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Reissues the last load without taking the parent id again and
    /// announces the outcome.
    ///
    /// Unlike an initial load, a failed refresh keeps the existing list so
    /// the user is not left staring at nothing. A successful refresh
    /// discards pending quantity edits; there is no conflict resolution.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), RequestError> {
        let parent_id = self.last_parent_id.clone().ok_or(RequestError::NotLoaded)?;
        debug!(%parent_id, "refreshing product items");
        match self.source.fetch_items(&parent_id).await {
            Ok(records) => {
                self.apply_records(records);
                self.notifier
                    .send(Notification::success("Product items refreshed successfully"));
                Ok(())
            }
            Err(error) => {
                warn!(%error, "refresh failed");
                self.last_error = Some(error.clone());
                self.notifier.send(Notification::error(
                    "An error occurred while refreshing product items",
                ));
                Err(error.into())
            }
        }
    }

    /// Sets the name filter. Matching is a lowercase substring test; no
    /// tokenization, no fuzzy matching.
    pub fn set_search_key(&mut self, text: &str) {
        self.search_key = text.to_lowercase();
    }

    /// Sets the requested quantity for the item with `id`, leaving every
    /// other field and item untouched. A no-op when no item matches.
    pub fn set_requested_quantity(&mut self, id: &str, value: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            debug!(id, value, "requested quantity updated");
            item.requested_quantity = value;
        }
    }

    /// Validates the edited list, and if it is clean submits the resulting
    /// batch to the Request Sink.
    ///
    /// Failure modes, in the order the user sees them:
    /// - one error notification per item over its on-hand quantity, nothing
    ///   submitted, quantities untouched;
    /// - a single "nothing requested" error when every quantity is zero;
    /// - the sink's failure, with the edited quantities preserved so the user
    ///   can retry.
    ///
    /// On sink success every requested quantity resets to 0 and the filter
    /// clears, so the filtered view equals the full, zeroed list again.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), RequestError> {
        let parent_id = self.last_parent_id.clone().ok_or(RequestError::NotLoaded)?;

        let batch = match batch::build_batch(&self.items) {
            Ok(batch) => batch,
            Err(violations) => {
                for violation in &violations {
                    warn!(item = %violation.name, requested = violation.requested,
                        on_hand = violation.on_hand, "requested quantity exceeds on hand");
                    self.notifier.send(Notification::error(violation.to_string()));
                }
                return Err(RequestError::Validation(violations));
            }
        };

        if batch.is_empty() {
            self.notifier.send(Notification::error(
                "No items requested. Please enter a quantity for at least one item.",
            ));
            return Err(RequestError::NothingRequested);
        }

        info!(products = batch.len(), %parent_id, "submitting request batch");
        match self.sink.request_items(&batch, &parent_id).await {
            Ok(()) => {
                for item in &mut self.items {
                    item.requested_quantity = 0;
                }
                // The filter resets with the quantities, as on a reload.
                self.search_key.clear();
                self.notifier
                    .send(Notification::success("Product items requested successfully"));
                Ok(())
            }
            Err(error) => {
                warn!(%error, "request submission failed");
                self.last_error = Some(error.clone());
                self.notifier.send(Notification::error(
                    "An error occurred while requesting product items",
                ));
                Err(error.into())
            }
        }
    }

    /// Replaces the list with zero-quantity copies of `records` and resets
    /// the filter, so the filtered view starts out equal to the full list.
    fn apply_records(&mut self, records: Vec<ItemRecord>) {
        let count = records.len();
        self.items = records.into_iter().map(ProductItem::from_record).collect();
        self.search_key.clear();
        self.last_error = None;
        info!(count, "product item list replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::model::ItemRecord;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn records() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new("1", "Hex Bolt", 10, "p1"),
            ItemRecord::new("2", "Lock Nut", 4, "p2"),
            ItemRecord::new("3", "Flat Washer", 25, "p3"),
        ]
    }

    async fn loaded_list(
        records: Vec<ItemRecord>,
    ) -> (
        ProductItemList<MockBackend, MockBackend>,
        MockBackend,
        UnboundedReceiver<Notification>,
    ) {
        let mut mock = MockBackend::new();
        mock.expect_fetch("wo_1").return_ok(records);
        let (notifier, receiver) = Notifier::channel();
        let mut list = ProductItemList::new(mock.clone(), mock.clone(), notifier);
        list.load("wo_1").await.unwrap();
        (list, mock, receiver)
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_substring() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;

        list.set_search_key("BoLt");
        let filtered = list.filtered_items();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Hex Bolt");

        list.set_search_key("t");
        let names: Vec<_> = list
            .filtered_items()
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        // Order of the full list is preserved.
        assert_eq!(names, vec!["Hex Bolt", "Lock Nut", "Flat Washer"]);
    }

    #[tokio::test]
    async fn empty_search_key_restores_full_list() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;

        list.set_search_key("nut");
        assert_eq!(list.filtered_items().len(), 1);

        list.set_search_key("");
        assert_eq!(list.filtered_items().len(), list.items().len());
    }

    #[tokio::test]
    async fn filter_with_no_match_is_empty() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;
        list.set_search_key("gasket");
        assert!(list.filtered_items().is_empty());
    }

    #[tokio::test]
    async fn quantity_edit_touches_exactly_one_item() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;
        let before: Vec<_> = list.items().to_vec();

        list.set_requested_quantity("2", 3);

        for (item, original) in list.items().iter().zip(&before) {
            if item.id == "2" {
                assert_eq!(item.requested_quantity, 3);
                assert_eq!(item.name, original.name);
                assert_eq!(item.quantity_on_hand, original.quantity_on_hand);
            } else {
                assert_eq!(item, original);
            }
        }

        // Idempotent: applying the same edit again changes nothing further.
        let after_once: Vec<_> = list.items().to_vec();
        list.set_requested_quantity("2", 3);
        assert_eq!(list.items(), &after_once[..]);
    }

    #[tokio::test]
    async fn quantity_edit_is_visible_through_the_filtered_view() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;
        list.set_search_key("nut");
        list.set_requested_quantity("2", 2);

        let filtered = list.filtered_items();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].requested_quantity, 2);
    }

    #[tokio::test]
    async fn quantity_edit_for_unknown_id_is_a_no_op() {
        let (mut list, _mock, _rx) = loaded_list(records()).await;
        let before: Vec<_> = list.items().to_vec();
        list.set_requested_quantity("99", 5);
        assert_eq!(list.items(), &before[..]);
    }

    #[tokio::test]
    async fn submit_before_load_is_rejected() {
        let mock = MockBackend::new();
        let (notifier, _rx) = Notifier::channel();
        let mut list = ProductItemList::new(mock.clone(), mock.clone(), notifier);

        assert_eq!(list.submit().await, Err(RequestError::NotLoaded));
        assert_eq!(list.refresh().await, Err(RequestError::NotLoaded));
        assert!(mock.sink_calls().is_empty());
    }
}
