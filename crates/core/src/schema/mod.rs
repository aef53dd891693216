//! Entity insert shapes and their closed enumerations.
//!
//! Each entity has a wire shape (`*Input`, exactly what a client may send,
//! camelCase keys) and a storage insert shape (`New*`, what the repositories
//! accept). A wire shape only becomes an insert shape through
//! [`validate_insert`](crate::validation::validate_insert).

pub mod contact;
pub mod project;
pub mod rendez_vous;
pub mod service;

pub use contact::{ContactMessageInput, HomeType, InquiryType, NewContactMessage, Timeline};
pub use project::{NewProject, ProjectInput};
pub use rendez_vous::{AppointmentType, NewRendezVousRequest, RendezVousRequestInput};
pub use service::{NewService, ServiceInput};

/// Message used for required text fields that were sent as `""`.
pub const MSG_EMPTY: &str = "Must not be empty";

/// A string that is not one of an enumeration's accepted values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind} '{value}'. Expected one of: {expected}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! define_closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $slug:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $slug)] $variant ),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire slug, also the value stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug),+
                }
            }

            /// Accepted slugs joined for error messages.
            pub fn expected() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }

            /// `validator` hook: accept only the declared slugs.
            pub fn validate_slug(value: &str) -> Result<(), validator::ValidationError> {
                value
                    .parse::<Self>()
                    .map(|_| ())
                    .map_err(|e| $crate::validation::rule_error("enum", e.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::schema::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok(Self::$variant),)+
                    _ => Err($crate::schema::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::expected(),
                    }),
                }
            }
        }
    };
}

pub(crate) use define_closed_enum;

/// `validator` hook for required text: reject the empty string.
pub(crate) fn non_empty(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        Err(crate::validation::rule_error("non_empty", MSG_EMPTY.to_string()))
    } else {
        Ok(())
    }
}

/// Map an enum parse failure onto the wire field it came from.
pub(crate) fn field_error(
    field: &'static str,
) -> impl FnOnce(UnknownVariant) -> crate::validation::ValidationError {
    move |e| crate::validation::ValidationError::single(field, e.to_string())
}
