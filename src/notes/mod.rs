//! Note-taking functionality
//!
//! Free-text notes keyed by problem title. Notes live independently of
//! progress: a note survives even if its problem leaves the catalog.

pub mod storage;

// Re-exports
pub use storage::{NOTES_KEY, NotesStore};
