use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: jobboard_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Handlers publish domain events here after their writes succeed.
    pub event_bus: Arc<jobboard_events::EventBus>,
}
