//! Handler for appointment requests.

use axum::extract::State;
use axum::Json;
use chantier_core::schema::RendezVousRequestInput;
use chantier_core::validation::validate_insert;
use chantier_db::models::rendez_vous_request::RendezVousRequest;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/rendez-vous
///
/// `requestedAt` arrives as a string and is stored as a UTC timestamp.
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<RendezVousRequest>> {
    let input = validate_insert::<RendezVousRequestInput>(body)?;

    let request = state.storage.create_rendez_vous_request(&input).await?;

    tracing::info!(
        rendez_vous_request_id = request.id,
        appointment_type = %input.appointment_type,
        requested_at = %request.requested_at,
        "Appointment request received",
    );

    Ok(Json(request))
}
