//! In-memory key-value store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

use super::KeyValueStore;

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    writes: usize,
}

/// Volatile store that counts writes
///
/// Clones share the same underlying map, so a caller can keep a handle
/// and observe what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key without counting it as a write
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock().values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Current raw value for a key
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned map still holds the last complete write
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("k", "v").unwrap();

        assert_eq!(handle.raw("k").as_deref(), Some("v"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn prepopulated_values_are_not_writes() {
        let store = MemoryStore::new().with_value("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 0);
    }
}
