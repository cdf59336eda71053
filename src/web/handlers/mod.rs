//! HTTP handlers for HobbyHub.

pub mod dashboard;
pub mod login;
pub mod register;

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::db::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// Site information for rendered pages.
    pub site: SiteConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Arc<Database>, site: SiteConfig) -> Self {
        Self { db, site }
    }
}
