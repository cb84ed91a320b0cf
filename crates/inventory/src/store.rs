//! The inventory store: stock mapping plus add/remove/query/persist/report.

use chrono::Utc;

use stockkeep_core::{DomainError, DomainResult, ItemName};

use crate::audit::{AuditEntry, AuditSink, StockEvent, TracingAuditSink};
use crate::levels::StockLevels;
use crate::repository::{PersistenceError, StockRepository};

/// Threshold used by [`InventoryStore::low_stock_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of [`InventoryStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The item is still stocked with `remaining` units.
    Decremented { remaining: i64 },
    /// The quantity reached zero or below and the item was dropped.
    Depleted,
    /// The item was not in stock; nothing changed.
    NotFound,
}

/// Snapshot of the mapping as logged by [`InventoryStore::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    entries: Vec<(ItemName, i64)>,
}

impl StockReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec!["No items in inventory.".to_string()];
        }
        self.entries
            .iter()
            .map(|(item, qty)| format!("{item} -> {qty}"))
            .collect()
    }
}

/// In-memory stock mapping with audited mutations.
///
/// Owned by the caller and passed by `&mut`; there is no global instance.
#[derive(Debug)]
pub struct InventoryStore<A = TracingAuditSink>
where
    A: AuditSink,
{
    levels: StockLevels,
    audit: A,
}

impl InventoryStore<TracingAuditSink> {
    pub fn new() -> Self {
        Self::with_audit(TracingAuditSink)
    }
}

impl Default for InventoryStore<TracingAuditSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> InventoryStore<A>
where
    A: AuditSink,
{
    pub fn with_audit(audit: A) -> Self {
        Self {
            levels: StockLevels::new(),
            audit,
        }
    }

    pub fn levels(&self) -> &StockLevels {
        &self.levels
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Item names in insertion order.
    pub fn items(&self) -> Vec<ItemName> {
        self.levels.names().cloned().collect()
    }

    fn emit(&self, event: StockEvent) {
        self.audit.record(AuditEntry::new(event));
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// `qty` may be negative; the result is stored as-is even when it drops
    /// to zero or below. Returns the new quantity.
    pub fn add(&mut self, item: &str, qty: i64) -> DomainResult<i64> {
        let name = ItemName::new(item)
            .map_err(|_| DomainError::invalid_argument("item name must be non-empty text"))?;

        let current = self.levels.get(item).unwrap_or(0);
        let quantity = current.checked_add(qty).ok_or_else(|| {
            DomainError::invalid_argument(format!("adding {qty} to {current} of '{item}' overflows"))
        })?;

        self.levels.insert(name.clone(), quantity);
        tracing::info!("Added {} of {}", qty, name);
        self.emit(StockEvent::Added {
            item: name,
            qty,
            quantity,
            occurred_at: Utc::now(),
        });

        Ok(quantity)
    }

    /// Take `qty` units of `item` out of stock.
    ///
    /// A missing item is logged and reported as [`Removal::NotFound`]. A
    /// negative `qty` that would push the quantity past `i64::MAX` is logged
    /// and returned as `InvalidArgument`; in both cases the mapping is
    /// untouched.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        let Some((name, current)) = self.levels.get_key_value(item) else {
            tracing::warn!("Item '{}' not found in stock.", item);
            return Ok(Removal::NotFound);
        };
        let name = name.clone();

        // Underflow past i64::MIN is still "below zero", so it depletes.
        let remaining = match current.checked_sub(qty) {
            Some(remaining) => remaining,
            None if qty > 0 => i64::MIN,
            None => {
                tracing::error!(
                    "Invalid value for '{}': removing {} from {} overflows",
                    item,
                    qty,
                    current
                );
                return Err(DomainError::invalid_argument(format!(
                    "removing {qty} from {current} of '{item}' overflows"
                )));
            }
        };

        let occurred_at = Utc::now();
        let removal = if remaining <= 0 {
            self.levels.remove(item);
            self.emit(StockEvent::Depleted {
                item: name.clone(),
                qty,
                occurred_at,
            });
            Removal::Depleted
        } else {
            self.levels.insert(name.clone(), remaining);
            self.emit(StockEvent::Removed {
                item: name.clone(),
                qty,
                remaining,
                occurred_at,
            });
            Removal::Decremented { remaining }
        };

        tracing::info!("Removed {} of {}", qty, name);
        Ok(removal)
    }

    /// Stored quantity, or 0 when the item is absent.
    pub fn quantity(&self, item: &str) -> i64 {
        self.levels.get(item).unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: i64) -> Vec<ItemName> {
        self.levels
            .iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn low_stock_default(&self) -> Vec<ItemName> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Replace the whole mapping with the repository's contents.
    ///
    /// On any failure the mapping is reset to empty, the failure is logged,
    /// and the tagged error is returned for callers that care. Returns the
    /// number of items loaded.
    pub fn load<R>(&mut self, repo: &R) -> Result<usize, PersistenceError>
    where
        R: StockRepository + ?Sized,
    {
        match repo.load() {
            Ok(levels) => {
                let items = levels.len();
                self.levels = levels;
                tracing::info!("Inventory data loaded successfully.");
                self.emit(StockEvent::Loaded {
                    location: repo.location(),
                    items,
                    occurred_at: Utc::now(),
                });
                Ok(items)
            }
            Err(err) => {
                self.levels.clear();
                match &err {
                    PersistenceError::NotFound { path } => {
                        tracing::warn!("File {} not found. Starting with empty inventory.", path);
                    }
                    PersistenceError::Malformed { path, reason } => {
                        tracing::error!(reason = %reason, "Invalid JSON in {}.", path);
                    }
                    PersistenceError::Io { path, source } => {
                        tracing::error!(error = %source, "File read error on {}.", path);
                    }
                }
                self.emit(StockEvent::Reset {
                    location: repo.location(),
                    reason: err.to_string(),
                    occurred_at: Utc::now(),
                });
                Err(err)
            }
        }
    }

    /// Write the mapping to the repository. Failures are logged and returned;
    /// the in-memory mapping is never affected.
    pub fn save<R>(&self, repo: &R) -> Result<(), PersistenceError>
    where
        R: StockRepository + ?Sized,
    {
        match repo.save(&self.levels) {
            Ok(()) => {
                tracing::info!("Inventory data saved successfully.");
                self.emit(StockEvent::Saved {
                    location: repo.location(),
                    items: self.levels.len(),
                    occurred_at: Utc::now(),
                });
                Ok(())
            }
            Err(err) => {
                tracing::error!("File write error: {}", err);
                Err(err)
            }
        }
    }

    /// Log every item with its quantity (or that there are none).
    pub fn report(&self) -> StockReport {
        let report = StockReport {
            entries: self
                .levels
                .iter()
                .map(|(name, qty)| (name.clone(), qty))
                .collect(),
        };

        tracing::info!("Items Report:");
        for line in report.lines() {
            tracing::info!("{}", line);
        }

        report
    }
}
