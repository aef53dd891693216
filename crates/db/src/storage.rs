//! The persistence interface consumed by the HTTP layer.
//!
//! Errors are returned as raw [`sqlx::Error`]: callers treat any failure
//! here as an infrastructure fault, never as a validation problem. Input is
//! assumed to be validated already; storage does not re-check it.

use async_trait::async_trait;
use chantier_core::schema::{NewContactMessage, NewProject, NewRendezVousRequest, NewService};
use chantier_core::types::DbId;

use crate::models::contact_message::ContactMessage;
use crate::models::project::Project;
use crate::models::rendez_vous_request::RendezVousRequest;
use crate::models::service::Service;
use crate::repositories::{ContactMessageRepo, ProjectRepo, RendezVousRequestRepo, ServiceRepo};
use crate::DbPool;

#[async_trait]
pub trait Storage: Send + Sync {
    /// All projects; empty when the table is empty.
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error>;

    /// `Ok(None)` when no row has this id.
    async fn get_project(&self, id: DbId) -> Result<Option<Project>, sqlx::Error>;

    async fn create_project(&self, input: &NewProject) -> Result<Project, sqlx::Error>;

    async fn list_services(&self) -> Result<Vec<Service>, sqlx::Error>;

    async fn create_service(&self, input: &NewService) -> Result<Service, sqlx::Error>;

    async fn create_contact_message(
        &self,
        input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error>;

    async fn create_rendez_vous_request(
        &self,
        input: &NewRendezVousRequest,
    ) -> Result<RendezVousRequest, sqlx::Error>;

    /// Liveness probe for `/health`. Backends with nothing to reach are always up.
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// PostgreSQL-backed [`Storage`], delegating to the repositories.
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list(&self.pool).await
    }

    async fn get_project(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn create_project(&self, input: &NewProject) -> Result<Project, sqlx::Error> {
        ProjectRepo::create(&self.pool, input).await
    }

    async fn list_services(&self) -> Result<Vec<Service>, sqlx::Error> {
        ServiceRepo::list(&self.pool).await
    }

    async fn create_service(&self, input: &NewService) -> Result<Service, sqlx::Error> {
        ServiceRepo::create(&self.pool, input).await
    }

    async fn create_contact_message(
        &self,
        input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        ContactMessageRepo::create(&self.pool, input).await
    }

    async fn create_rendez_vous_request(
        &self,
        input: &NewRendezVousRequest,
    ) -> Result<RendezVousRequest, sqlx::Error> {
        RendezVousRequestRepo::create(&self.pool, input).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
