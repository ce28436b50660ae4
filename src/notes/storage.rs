//! Note persistence

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::storage::KeyValueStore;

/// Storage key for the notes record
pub const NOTES_KEY: &str = "dsa_notes";

/// Notes per problem title
#[derive(Debug)]
pub struct NotesStore<S: KeyValueStore> {
    storage: S,
    notes: BTreeMap<String, String>,
}

impl<S: KeyValueStore> NotesStore<S> {
    /// Create an empty store over `storage`
    pub fn new(storage: S) -> Self {
        Self { storage, notes: BTreeMap::new() }
    }

    /// Load persisted notes, starting empty if none are usable
    pub fn initialize(&mut self) -> Result<()> {
        let Some(contents) = self.storage.get(NOTES_KEY)? else {
            self.notes.clear();
            return Ok(());
        };

        self.notes = match serde_json::from_str(&contents) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!("Ignoring malformed notes record: {}", e);
                BTreeMap::new()
            }
        };
        tracing::debug!("Loaded {} notes", self.notes.len());
        Ok(())
    }

    /// Insert or overwrite the note for `title`, then persist all notes
    pub fn set_note(&mut self, title: &str, text: &str) -> Result<()> {
        self.notes.insert(title.to_string(), text.to_string());
        self.persist()
    }

    /// Write the full mapping under [`NOTES_KEY`]
    pub fn persist(&self) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(&self.notes).with_context(|| "Failed to serialize notes")?;
        self.storage.set(NOTES_KEY, &contents)
    }

    /// Note for a title, if an entry exists
    pub fn note(&self, title: &str) -> Option<&str> {
        self.notes.get(title).map(String::as_str)
    }

    /// Note for a title, empty when there is none
    pub fn note_or_empty(&self, title: &str) -> &str {
        self.note(title).unwrap_or("")
    }

    /// Whether a title has a non-empty note
    pub fn has_note(&self, title: &str) -> bool {
        self.note(title).is_some_and(|n| !n.is_empty())
    }

    /// All notes, ordered by title
    pub fn notes(&self) -> &BTreeMap<String, String> {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
