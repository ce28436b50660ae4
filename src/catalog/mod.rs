//! Problem catalog
//!
//! The catalog is the fixed, ordered list of problems that make up the
//! 12-week curriculum. It ships embedded in the binary and seeds the
//! progress store on first run.

pub mod model;
pub mod seed;

// Re-exports
pub use model::{Difficulty, ExternalReference, Problem};
pub use seed::{CatalogEntry, seed_catalog, seed_problems};
