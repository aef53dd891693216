//! Contact message entity model.

use chantier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
///
/// Enum columns are stored as their wire slugs and read back as text.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub type_demande: String,
    pub type_maison: String,
    pub budget: String,
    pub region: String,
    pub echeancier: String,
    pub message: String,
    pub created_at: Timestamp,
}
