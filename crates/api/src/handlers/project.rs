//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use chantier_core::error::CoreError;
use chantier_core::types::DbId;
use chantier_db::models::project::Project;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.storage.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}
