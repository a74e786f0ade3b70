//! Local suggestion cache
//!
//! Holds every catalog entry seen during the session. Entries are unique and
//! always iterated in ascending ordinal order, so prefix search results come
//! out sorted without extra work.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Cache handle shared between the coordinator, the control gate and presentation
pub type SharedCache = Arc<Mutex<SuggestionCache>>;

/// Sorted, deduplicated set of catalog entry names
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entries: BTreeSet<String>,
}

impl SuggestionCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty cache behind a shared lock
    pub fn shared() -> SharedCache {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Merge entries into the cache.
    ///
    /// Entries are trimmed; blank ones are dropped. Values already present
    /// (or repeated within `entries`) are kept once. Returns how many new
    /// entries were inserted.
    pub fn add<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.entries.len();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if !entry.is_empty() {
                self.entries.insert(entry.to_string());
            }
        }
        self.entries.len() - before
    }

    /// Return every entry starting with `query`, ignoring case.
    ///
    /// The result keeps the cache order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }

    /// Exact (case-sensitive) membership after trimming
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value.trim())
    }

    /// Snapshot of all entries in sorted order
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
