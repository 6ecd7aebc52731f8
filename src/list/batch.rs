//! Derives a validated request batch from the edited item list.

use crate::list::error::QuantityViolation;
use crate::model::{ProductItem, RequestBatch};

/// Scans `items` in list order and builds the batch of positive requested
/// quantities.
///
/// An item asking for more than its quantity on hand becomes a
/// [`QuantityViolation`] and is left out of the batch; the scan continues so
/// every offending item is reported. Any violation aborts the whole
/// submission, so the batch is only returned when the scan is clean.
///
/// A clean scan with nothing requested returns an empty batch; deciding what
/// that means (abort with "nothing requested") is the caller's job, after
/// validation, matching the user-visible error ordering.
pub fn build_batch(items: &[ProductItem]) -> Result<RequestBatch, Vec<QuantityViolation>> {
    let mut batch = RequestBatch::default();
    let mut violations = Vec::new();

    for item in items {
        if item.requested_quantity == 0 {
            continue;
        }
        if item.requested_quantity > item.quantity_on_hand {
            violations.push(QuantityViolation {
                id: item.id.clone(),
                name: item.name.clone(),
                requested: item.requested_quantity,
                on_hand: item.quantity_on_hand,
            });
        } else {
            // Last write wins if a product reference repeats across items.
            batch.insert(item.product_reference_id.clone(), item.requested_quantity);
        }
    }

    if violations.is_empty() {
        Ok(batch)
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemRecord;

    fn item(id: &str, name: &str, on_hand: u32, product_ref: &str, requested: u32) -> ProductItem {
        let mut item = ProductItem::from_record(ItemRecord::new(id, name, on_hand, product_ref));
        item.requested_quantity = requested;
        item
    }

    #[test]
    fn zero_quantities_are_skipped() {
        let items = vec![item("1", "Bolt", 10, "p1", 0), item("2", "Nut", 4, "p2", 2)];
        let batch = build_batch(&items).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.get("p2"), Some(2));

        let entries: Vec<_> = batch.iter().collect();
        assert_eq!(entries, vec![("p2", 2)]);
    }

    #[test]
    fn all_zero_yields_empty_batch() {
        let items = vec![item("1", "Bolt", 10, "p1", 0)];
        let batch = build_batch(&items).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn over_on_hand_reports_one_violation_per_item() {
        let items = vec![
            item("1", "Bolt", 10, "p1", 15),
            item("2", "Nut", 4, "p2", 2),
            item("3", "Washer", 1, "p3", 3),
        ];
        let violations = build_batch(&items).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].name, "Bolt");
        assert_eq!(violations[0].requested, 15);
        assert_eq!(violations[0].on_hand, 10);
        assert_eq!(violations[1].name, "Washer");
    }

    #[test]
    fn requesting_exactly_on_hand_is_valid() {
        let items = vec![item("1", "Bolt", 10, "p1", 10)];
        let batch = build_batch(&items).unwrap();
        assert_eq!(batch.get("p1"), Some(10));
    }

    #[test]
    fn duplicate_product_reference_last_write_wins() {
        let items = vec![
            item("1", "Bolt A", 10, "p1", 3),
            item("2", "Bolt B", 10, "p1", 7),
        ];
        let batch = build_batch(&items).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.get("p1"), Some(7));
    }

    #[test]
    fn violation_display_names_the_item() {
        let items = vec![item("1", "Bolt", 10, "p1", 15)];
        let violations = build_batch(&items).unwrap_err();
        assert_eq!(
            violations[0].to_string(),
            "Requested quantity for Bolt exceeds quantity on hand"
        );
    }
}
