//! Pure data structures (DTOs) shared between the list component and the
//! backend traits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One inventory row as returned by the Item Source.
///
/// Records are read-only within a load cycle: the component never writes any
/// of these fields back, it only layers a requested quantity on top (see
/// [`ProductItem`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    /// Unique within one list, stable across refreshes.
    pub id: String,
    /// Display label, also the target of name filtering.
    pub name: String,
    /// Available stock against the parent record.
    pub quantity_on_hand: u32,
    /// Identifier of the underlying product, distinct from `id`. Keys the
    /// submitted request batch.
    pub product_reference_id: String,
}

impl ItemRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity_on_hand: u32,
        product_reference_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity_on_hand,
            product_reference_id: product_reference_id.into(),
        }
    }
}

/// An [`ItemRecord`] plus the locally edited requested quantity.
///
/// `requested_quantity` is view state, not backend state: it starts at 0 on
/// every load and is reset to 0 after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductItem {
    pub id: String,
    pub name: String,
    pub quantity_on_hand: u32,
    pub product_reference_id: String,
    pub requested_quantity: u32,
}

impl ProductItem {
    /// Wraps a backend record with a zeroed requested quantity.
    pub fn from_record(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            quantity_on_hand: record.quantity_on_hand,
            product_reference_id: record.product_reference_id,
            requested_quantity: 0,
        }
    }
}

/// The submission payload: product reference id -> requested quantity.
///
/// Duplicate product references across items are not excluded by the data
/// model; on insert, the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestBatch(HashMap<String, u32>);

impl RequestBatch {
    pub fn insert(&mut self, product_reference_id: impl Into<String>, quantity: u32) {
        self.0.insert(product_reference_id.into(), quantity);
    }

    pub fn get(&self, product_reference_id: &str) -> Option<u32> {
        self.0.get(product_reference_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
