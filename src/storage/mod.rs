//! Local key-value persistence
//!
//! Every store in the tracker owns exactly one key and writes its whole
//! state as a single text value under it.

pub mod file;
pub mod memory;

use anyhow::Result;

// Re-exports
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-keyed, string-valued persistent store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
