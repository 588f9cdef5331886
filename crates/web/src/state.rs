use std::sync::Arc;

use holonet_core::directory::CharacterDirectory;

use crate::config::ServerConfig;
use crate::render::Pages;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` and read-only.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External character directory.
    pub directory: Arc<dyn CharacterDirectory>,
    /// Compiled page templates.
    pub pages: Arc<Pages>,
}
