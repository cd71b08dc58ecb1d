//! Application state for the API service.

use std::sync::Arc;

use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use sqlx::mysql::MySqlPoolOptions;

use crate::service::{CatalogService, CatalogServiceTrait};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogServiceTrait>,
}

impl AppState {
    /// Creates a new application state with a lazily connected MySQL pool.
    ///
    /// No connection is established here; each request acquires one from the
    /// pool and a refused server surfaces as that request's error.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_lazy(&config.database.url())
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        Ok(Self {
            config,
            catalog: Arc::new(CatalogService::new(pool)),
        })
    }
}
