//! Bounded evaluation history.
//!
//! Keeps the most recent `expression :- result` entries for display,
//! evicting the oldest entry once the buffer is full.

use std::collections::VecDeque;

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 6;

/// Fixed-capacity FIFO log of evaluated expressions.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl BoundedHistory {
    /// Create a history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Format an entry the way it is displayed.
    pub fn format_entry(expression: &str, result: &str) -> String {
        format!("{} :- {}", expression, result)
    }

    /// Append an entry, evicting the oldest one when full.
    pub fn append(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Entries in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Entries joined for display, one per line.
    pub fn render(&self) -> String {
        self.snapshot().join("\n")
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BoundedHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
