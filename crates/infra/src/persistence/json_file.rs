use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockkeep_inventory::{PersistenceError, StockLevels, StockRepository};

use super::{decode, encode};

/// File name used when no explicit path is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Stock repository backed by a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl StockRepository for JsonFileRepository {
    fn location(&self) -> String {
        self.display_path()
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        let path = self.display_path();
        let raw = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PersistenceError::NotFound { path: path.clone() },
            // Non UTF-8 content cannot be JSON.
            ErrorKind::InvalidData => PersistenceError::Malformed {
                path: path.clone(),
                reason: source.to_string(),
            },
            _ => PersistenceError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let levels = decode(&raw, &path)?;
        tracing::debug!(items = levels.len(), "read {}", path);
        Ok(levels)
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let path = self.display_path();
        let bytes = encode(levels, &path)?;
        fs::write(&self.path, bytes).map_err(|source| PersistenceError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(items = levels.len(), "wrote {}", path);
        Ok(())
    }
}
