//! In-memory key-value store
//!
//! Useful for tests and for embedders that manage durability themselves.

use std::collections::HashMap;

use crate::error::BudgetResult;

use super::KeyValueStore;

/// HashMap-backed store with no durability
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries (simulates prior sessions)
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Snapshot of the current entries
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("budget").unwrap(), None);

        store.set("budget", "100").unwrap();
        assert_eq!(store.get("budget").unwrap(), Some("100".to_string()));

        store.remove("budget").unwrap();
        assert_eq!(store.get("budget").unwrap(), None);
    }

    #[test]
    fn test_with_entries() {
        let mut seed = HashMap::new();
        seed.insert("budget".to_string(), "75".to_string());

        let store = MemoryStore::with_entries(seed);
        assert_eq!(store.get("budget").unwrap(), Some("75".to_string()));
    }
}
