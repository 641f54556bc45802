use std::sync::Arc;

use ovation_db::store::RecordStore;

use crate::config::ServerConfig;
use crate::views::ViewEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`). The record
/// store is held as a trait object so tests can inject a fake.
#[derive(Clone)]
pub struct AppState {
    /// Testimonial record store.
    pub store: Arc<dyn RecordStore>,
    /// Compiled view templates.
    pub views: Arc<ViewEngine>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
