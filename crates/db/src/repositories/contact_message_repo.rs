//! Repository for the `contact_messages` table.

use chantier_core::schema::NewContactMessage;
use sqlx::PgPool;

use crate::models::contact_message::ContactMessage;

const COLUMNS: &str = "id, name, email, phone, type_demande, type_maison, budget, region, \
                       echeancier, message, created_at";

/// Contact messages are write-only from the API's point of view.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a message. `id` and `created_at` come from column defaults.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages
                (name, email, phone, type_demande, type_maison, budget, region, echeancier, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.type_demande.as_str())
            .bind(input.type_maison.as_str())
            .bind(&input.budget)
            .bind(&input.region)
            .bind(input.echeancier.as_str())
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
