//! `stockkeep-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{AuditEntryId, ItemName};
pub use value_object::ValueObject;
