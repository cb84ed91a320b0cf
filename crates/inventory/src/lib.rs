//! Inventory domain module.
//!
//! Holds the stock mapping and the operations over it. Persistence and audit
//! delivery are reached through the [`StockRepository`] and [`AuditSink`]
//! seams; concrete file/in-memory implementations live in `stockkeep-infra`.

pub mod audit;
pub mod levels;
pub mod repository;
pub mod store;

pub use audit::{AuditEntry, AuditSink, StockEvent, TracingAuditSink};
pub use levels::StockLevels;
pub use repository::{PersistenceError, StockRepository};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, Removal, StockReport};
