//! Infrastructure layer: file persistence and audit sinks.

pub mod audit_log;
pub mod persistence;

pub use audit_log::InMemoryAuditSink;
pub use persistence::{DEFAULT_DATA_FILE, InMemoryRepository, JsonFileRepository};
