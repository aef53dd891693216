//! Service entity model.

use chantier_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
}
