//! Appointment request shapes.
//!
//! On the wire `requestedAt` is a string; it is parsed into a UTC
//! [`Timestamp`] before it reaches storage. Accepted forms:
//!
//! | Input                              | Interpretation            |
//! |------------------------------------|---------------------------|
//! | `2025-03-14T09:30:00-04:00`        | RFC 3339, converted to UTC |
//! | `2025-03-14T13:30:00.000Z`         | RFC 3339                  |
//! | `2025-03-14T13:30Z`                | RFC 3339 without seconds  |
//! | `2025-03-14T13:30` / `...:00`      | naive, taken as UTC       |
//! | `2025-03-14 13:30:00`              | naive, taken as UTC       |
//! | `2025-03-14`                       | midnight UTC              |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::{define_closed_enum, field_error};
use crate::types::Timestamp;
use crate::validation::{rule_error, FieldSpec, InsertShape, ValidationError};

pub const MSG_INVALID_DATE_TIME: &str = "Invalid date-time";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

define_closed_enum! {
    /// How the appointment takes place.
    AppointmentType("appointmentType") {
        Phone = "telephone",
        Virtual = "virtuel",
        InPerson = "en-personne",
    }
}

/// Body of `POST /api/rendez-vous`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RendezVousRequestInput {
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub name: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub phone: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(custom(function = "validate_requested_at"))]
    pub requested_at: String,
    #[validate(custom(function = "AppointmentType::validate_slug"))]
    pub appointment_type: String,
    pub message: Option<String>,
}

/// Insert shape for `rendez_vous_requests`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRendezVousRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub requested_at: Timestamp,
    pub appointment_type: AppointmentType,
    pub message: Option<String>,
}

/// Parse a client-supplied date-time into UTC. `None` if unparseable.
pub fn parse_requested_at(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(dt) = DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| with_seconds(raw).and_then(|s| DateTime::parse_from_rfc3339(&s).ok()))
    {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// `2025-03-14T13:30Z` -> `2025-03-14T13:30:00Z`. `None` unless the input is
/// minute precision followed directly by an offset.
fn with_seconds(raw: &str) -> Option<String> {
    let (head, offset) = (raw.get(..16)?, raw.get(16..)?);
    if head.as_bytes()[13] == b':' && offset.starts_with(['Z', 'z', '+', '-']) {
        Some(format!("{head}:00{offset}"))
    } else {
        None
    }
}

fn validate_requested_at(value: &str) -> Result<(), validator::ValidationError> {
    match parse_requested_at(value) {
        Some(_) => Ok(()),
        None => Err(rule_error("date_time", MSG_INVALID_DATE_TIME.to_string())),
    }
}

impl InsertShape for RendezVousRequestInput {
    type Output = NewRendezVousRequest;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name"),
        FieldSpec::required("phone"),
        FieldSpec::required("email"),
        FieldSpec::required("requestedAt"),
        FieldSpec::required("appointmentType"),
        FieldSpec::optional("message"),
    ];

    fn into_insert(self) -> Result<NewRendezVousRequest, ValidationError> {
        let requested_at = parse_requested_at(&self.requested_at)
            .ok_or_else(|| ValidationError::single("requestedAt", MSG_INVALID_DATE_TIME))?;
        let appointment_type = self
            .appointment_type
            .parse()
            .map_err(field_error("appointmentType"))?;

        Ok(NewRendezVousRequest {
            name: self.name,
            phone: self.phone,
            email: self.email,
            requested_at,
            appointment_type,
            message: self.message,
        })
    }
}
