//! University Library Server
//!
//! Books, students and loans held in a process-local store and served as a
//! JSON API with a self-describing OpenAPI schema.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build a fresh store and the services on top of it
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let repository = Repository::new();
        if config.store.seed_initial_data {
            repository.seed_initial_data()?;
        }

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
        })
    }
}
