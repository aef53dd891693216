use std::sync::Arc;

use chantier_db::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Persistence operations and the database liveness probe.
    pub storage: Arc<dyn Storage>,
    pub config: Arc<ServerConfig>,
}
