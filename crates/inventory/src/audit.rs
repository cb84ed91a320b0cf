//! Audit entries and the sink they are delivered to.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::{AuditEntryId, ItemName};

/// A fact about the stock mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StockEvent {
    Added {
        item: ItemName,
        qty: i64,
        quantity: i64,
        occurred_at: DateTime<Utc>,
    },
    Removed {
        item: ItemName,
        qty: i64,
        remaining: i64,
        occurred_at: DateTime<Utc>,
    },
    /// The item reached zero (or below) and was dropped from the mapping.
    Depleted {
        item: ItemName,
        qty: i64,
        occurred_at: DateTime<Utc>,
    },
    Loaded {
        location: String,
        items: usize,
        occurred_at: DateTime<Utc>,
    },
    Saved {
        location: String,
        items: usize,
        occurred_at: DateTime<Utc>,
    },
    /// The mapping was emptied because a load failed.
    Reset {
        location: String,
        reason: String,
        occurred_at: DateTime<Utc>,
    },
}

impl StockEvent {
    /// Stable event name (e.g. "inventory.stock.added").
    pub fn event_type(&self) -> &'static str {
        match self {
            StockEvent::Added { .. } => "inventory.stock.added",
            StockEvent::Removed { .. } => "inventory.stock.removed",
            StockEvent::Depleted { .. } => "inventory.stock.depleted",
            StockEvent::Loaded { .. } => "inventory.stock.loaded",
            StockEvent::Saved { .. } => "inventory.stock.saved",
            StockEvent::Reset { .. } => "inventory.stock.reset",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::Added { occurred_at, .. }
            | StockEvent::Removed { occurred_at, .. }
            | StockEvent::Depleted { occurred_at, .. }
            | StockEvent::Loaded { occurred_at, .. }
            | StockEvent::Saved { occurred_at, .. }
            | StockEvent::Reset { occurred_at, .. } => *occurred_at,
        }
    }
}

/// An id-stamped [`StockEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entry_id: AuditEntryId,
    pub event: StockEvent,
}

impl AuditEntry {
    pub fn new(event: StockEvent) -> Self {
        Self {
            entry_id: AuditEntryId::new(),
            event,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let at = self.event.occurred_at();
        match &self.event {
            StockEvent::Added { item, qty, .. } => write!(f, "{at}: Added {qty} of {item}"),
            StockEvent::Removed { item, qty, .. } | StockEvent::Depleted { item, qty, .. } => {
                write!(f, "{at}: Removed {qty} of {item}")
            }
            StockEvent::Loaded { location, items, .. } => {
                write!(f, "{at}: Loaded {items} items from {location}")
            }
            StockEvent::Saved { location, items, .. } => {
                write!(f, "{at}: Saved {items} items to {location}")
            }
            StockEvent::Reset { location, reason, .. } => {
                write!(f, "{at}: Reset inventory after failed load of {location}: {reason}")
            }
        }
    }
}

/// Destination for audit entries emitted by the inventory store.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

impl<S> AuditSink for Arc<S>
where
    S: AuditSink + ?Sized,
{
    fn record(&self, entry: AuditEntry) {
        (**self).record(entry)
    }
}

/// Default sink: forwards entries to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: AuditEntry) {
        tracing::debug!(
            entry_id = %entry.entry_id,
            event_type = entry.event_type(),
            "{entry}"
        );
    }
}
