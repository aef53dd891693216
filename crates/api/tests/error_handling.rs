//! Error-to-response mapping, both in isolation and through the router.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chantier_api::error::AppError;
use chantier_core::error::CoreError;
use chantier_core::schema::{NewContactMessage, NewProject, NewRendezVousRequest, NewService};
use chantier_core::types::DbId;
use chantier_core::validation::{FieldViolation, ValidationError};
use chantier_db::models::contact_message::ContactMessage;
use chantier_db::models::project::Project;
use chantier_db::models::rendez_vous_request::RendezVousRequest;
use chantier_db::models::service::Service;
use chantier_db::Storage;
use common::{body_json, get, post_json};
use serde_json::json;

/// A [`Storage`] whose every operation fails as if the pool were gone.
struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn get_project(&self, _id: DbId) -> Result<Option<Project>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_project(&self, _input: &NewProject) -> Result<Project, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn list_services(&self) -> Result<Vec<Service>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_service(&self, _input: &NewService) -> Result<Service, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_contact_message(
        &self,
        _input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn create_rendez_vous_request(
        &self,
        _input: &NewRendezVousRequest,
    ) -> Result<RendezVousRequest, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

fn failing_app() -> axum::Router {
    common::build_test_app_with_storage(Arc::new(FailingStorage))
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let response = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: 7,
    })
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "message": "Project not found", "code": "NOT_FOUND" }));
}

#[tokio::test]
async fn test_validation_maps_to_400_with_field_list() {
    let err = ValidationError::from_violations(vec![
        FieldViolation::new("title", "Required"),
        FieldViolation::new("category", "Must not be empty"),
    ]);
    let response = AppError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["message"],
        "Invalid input: category: Must not be empty; title: Required"
    );
    assert_eq!(json["errors"][0]["field"], "category");
    assert_eq!(json["errors"][1]["field"], "title");
}

#[tokio::test]
async fn test_bad_request_and_media_type_keep_their_message() {
    let response = AppError::BadRequest("bad id".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "bad id", "code": "BAD_REQUEST" })
    );

    let response = AppError::UnsupportedMediaType("need json".into()).into_response();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn test_database_error_is_opaque() {
    let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({ "message": "An internal error occurred", "code": "INTERNAL_ERROR" })
    );
}

#[tokio::test]
async fn test_storage_failure_on_read_returns_500() {
    for uri in ["/api/projects", "/api/projects/1", "/api/services"] {
        let response = get(failing_app(), uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert!(!json["message"].as_str().unwrap().contains("pool"));
    }
}

#[tokio::test]
async fn test_storage_failure_on_submit_returns_500() {
    let body = json!({
        "name": "Luc Gagnon",
        "phone": "819-555-0199",
        "email": "luc@example.com",
        "requestedAt": "2025-03-14T09:30:00Z",
        "appointmentType": "telephone",
    });
    let response = post_json(failing_app(), "/api/rendez-vous", body).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_invalid_submit_is_rejected_before_storage() {
    let response = post_json(failing_app(), "/api/contact", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unreachable_storage_reports_degraded_health() {
    let response = get(failing_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
