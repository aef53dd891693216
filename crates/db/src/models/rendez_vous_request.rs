//! Appointment request entity model.

use chantier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rendez_vous_requests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RendezVousRequest {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub requested_at: Timestamp,
    pub appointment_type: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
}
