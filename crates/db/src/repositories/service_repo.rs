//! Repository for the `services` table.

use chantier_core::schema::NewService;
use sqlx::PgPool;

use crate::models::service::Service;

const COLUMNS: &str = "id, title, description, icon";

/// Provides create and read operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// List all services in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY id ASC");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }
}
