//! Project entity model.

use chantier_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub location: Option<String>,
    pub completion_date: Option<String>,
}
