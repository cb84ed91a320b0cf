//! Ordered item → quantity mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockkeep_core::ItemName;

/// The stock mapping, iterated in insertion order.
///
/// Serializes as a JSON object whose keys keep that order. Re-inserting an
/// existing key updates the value in place; a key inserted after removal goes
/// to the end. A duplicate key in a loaded object keeps its first position and
/// its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevels {
    entries: IndexMap<ItemName, i64>,
}

impl StockLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, item: &str) -> Option<i64> {
        self.entries.get(item).copied()
    }

    /// Stored key and quantity for `item`.
    pub fn get_key_value(&self, item: &str) -> Option<(&ItemName, i64)> {
        self.entries.get_key_value(item).map(|(name, qty)| (name, *qty))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    /// Set the quantity for `item`, returning the previous value if any.
    pub fn insert(&mut self, item: ItemName, qty: i64) -> Option<i64> {
        self.entries.insert(item, qty)
    }

    /// Remove `item`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, item: &str) -> Option<i64> {
        self.entries.shift_remove(item)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.entries.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn names(&self) -> impl Iterator<Item = &ItemName> {
        self.entries.keys()
    }
}

impl FromIterator<(ItemName, i64)> for StockLevels {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
