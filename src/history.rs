use chrono::Local;
use serde::{Deserialize, Serialize};

/// Maximum number of history entries retained.
pub const HISTORY_CAPACITY: usize = 10;

/// A single completed calculation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Normalized expression that was evaluated
    pub expression: String,

    /// Numeric result
    pub result: f64,

    /// Local time-of-day when the entry was recorded
    pub timestamp: String,
}

/// Bounded record of past calculations, newest first.
///
/// Entries are evicted only by capacity overflow, oldest first.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a calculation: prepend an entry stamped with the current local
    /// time, then evict the oldest entry if capacity is exceeded.
    pub fn push(&mut self, expression: impl Into<String>, result: f64) {
        let entry = HistoryEntry {
            expression: expression.into(),
            result,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        };

        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Ordered view for display, most recent first. Consumers show a
    /// placeholder when this is empty.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
