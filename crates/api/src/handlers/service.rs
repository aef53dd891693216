//! Handlers for the `/services` resource.

use axum::extract::State;
use axum::Json;
use chantier_db::models::service::Service;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.storage.list_services().await?;
    Ok(Json(services))
}
