//! Persistence seam for the stock mapping.

use std::sync::Arc;

use thiserror::Error;

use crate::levels::StockLevels;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{path} not found")]
    NotFound { path: String },

    #[error("invalid JSON in {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, PersistenceError::Malformed { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            PersistenceError::NotFound { path }
            | PersistenceError::Malformed { path, .. }
            | PersistenceError::Io { path, .. } => path,
        }
    }
}

/// Where the stock mapping is loaded from and saved to.
pub trait StockRepository: Send + Sync {
    /// Human-readable location used in log lines (e.g. a file path).
    fn location(&self) -> String;

    fn load(&self) -> Result<StockLevels, PersistenceError>;

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError>;
}

impl<R> StockRepository for Arc<R>
where
    R: StockRepository + ?Sized,
{
    fn location(&self) -> String {
        (**self).location()
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        (**self).load()
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        (**self).save(levels)
    }
}
