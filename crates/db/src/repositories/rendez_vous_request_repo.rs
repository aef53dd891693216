//! Repository for the `rendez_vous_requests` table.

use chantier_core::schema::NewRendezVousRequest;
use sqlx::PgPool;

use crate::models::rendez_vous_request::RendezVousRequest;

const COLUMNS: &str =
    "id, name, phone, email, requested_at, appointment_type, message, created_at";

pub struct RendezVousRequestRepo;

impl RendezVousRequestRepo {
    /// Insert an appointment request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewRendezVousRequest,
    ) -> Result<RendezVousRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO rendez_vous_requests
                (name, phone, email, requested_at, appointment_type, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RendezVousRequest>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.requested_at)
            .bind(input.appointment_type.as_str())
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
