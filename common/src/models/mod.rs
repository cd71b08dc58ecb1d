//! Shared data models.

pub mod database;

// Re-export commonly used types
pub use database::DatabaseRecord;
