pub mod health;
pub mod project;
pub mod service;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list
/// /projects/{id}            get
/// /services                 list
/// /contact                  submit contact message (POST)
/// /rendez-vous              submit appointment request (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/services", service::router())
        .route("/contact", post(handlers::contact::submit))
        .route("/rendez-vous", post(handlers::rendez_vous::submit))
}
