//! Handler for contact form submissions.

use axum::extract::State;
use axum::Json;
use chantier_core::schema::ContactMessageInput;
use chantier_core::validation::validate_insert;
use chantier_db::models::contact_message::ContactMessage;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/contact
///
/// The body is validated strictly: unknown keys, including `id` and
/// `createdAt`, are rejected with 400.
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> AppResult<Json<ContactMessage>> {
    let input = validate_insert::<ContactMessageInput>(body)?;

    let message = state.storage.create_contact_message(&input).await?;

    tracing::info!(
        contact_message_id = message.id,
        type_demande = %input.type_demande,
        "Contact message received",
    );

    Ok(Json(message))
}
