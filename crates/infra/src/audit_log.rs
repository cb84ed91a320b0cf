use std::sync::RwLock;

use stockkeep_inventory::{AuditEntry, AuditSink};

/// In-memory audit sink for tests/dev. Keeps entries in recording order.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    entries: RwLock<Vec<AuditEntry>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        match self.entries.read() {
            Ok(entries) => entries.clone(),
            Err(_) => vec![],
        }
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.entries().iter().map(AuditEntry::event_type).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, entry: AuditEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(entry);
        }
    }
}
