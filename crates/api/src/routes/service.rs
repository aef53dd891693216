//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/services`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(service::list))
}
