//! Shared modules for the database listing system.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
