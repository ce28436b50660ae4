//! Remote user endpoint
//!
//! A small HTTP client that fetches a user record by id. It never touches
//! the progress or notes stores.

pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::{DEFAULT_USER_API_URL, UserClient};
pub use error::UserApiError;
pub use models::User;
