use std::sync::RwLock;

use stockkeep_inventory::{PersistenceError, StockLevels, StockRepository};

use super::{decode, encode};

const LOCATION: &str = "memory";

/// In-memory repository for tests/dev.
///
/// Holds the serialized JSON text rather than a `StockLevels` value, so
/// loads go through the same decoding as the file repository.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    contents: RwLock<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with raw JSON text.
    pub fn with_json(raw: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(raw.into())),
        }
    }

    /// Raw JSON last written (or seeded), if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok()?.clone()
    }
}

impl StockRepository for InMemoryRepository {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        let guard = self.contents.read().map_err(|_| PersistenceError::Io {
            path: LOCATION.to_string(),
            source: std::io::Error::other("lock poisoned"),
        })?;
        match guard.as_deref() {
            Some(raw) => decode(raw, LOCATION),
            None => Err(PersistenceError::NotFound {
                path: LOCATION.to_string(),
            }),
        }
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let bytes = encode(levels, LOCATION)?;
        let text = String::from_utf8(bytes).map_err(|e| PersistenceError::Malformed {
            path: LOCATION.to_string(),
            reason: e.to_string(),
        })?;
        let mut guard = self.contents.write().map_err(|_| PersistenceError::Io {
            path: LOCATION.to_string(),
            source: std::io::Error::other("lock poisoned"),
        })?;
        *guard = Some(text);
        Ok(())
    }
}
