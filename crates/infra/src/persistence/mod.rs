//! Stock mapping persistence.
//!
//! Both repositories store the mapping as a JSON object (item name → integer
//! quantity) with 4-space indentation and keys in insertion order.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_DATA_FILE, JsonFileRepository};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use stockkeep_inventory::{PersistenceError, StockLevels};

pub(crate) fn encode(levels: &StockLevels, path: &str) -> Result<Vec<u8>, PersistenceError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    levels
        .serialize(&mut ser)
        .map_err(|e| PersistenceError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    Ok(buf)
}

pub(crate) fn decode(raw: &str, path: &str) -> Result<StockLevels, PersistenceError> {
    serde_json::from_str(raw).map_err(|e| PersistenceError::Malformed {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
