//! Completion tracking
//!
//! The progress store is the only writer of completion state. It holds the
//! authoritative problem list and mirrors it to storage after every change.

pub mod store;

// Re-exports
pub use store::{PROGRESS_KEY, ProgressStore};
