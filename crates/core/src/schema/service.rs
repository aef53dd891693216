//! Service offering shapes.

use serde::Deserialize;
use validator::Validate;

use crate::validation::{FieldSpec, InsertShape, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceInput {
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub title: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub description: String,
    /// Symbolic glyph name ("Hammer"), resolved by the front end.
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub icon: String,
}

/// Insert shape for the `services` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl InsertShape for ServiceInput {
    type Output = NewService;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title"),
        FieldSpec::required("description"),
        FieldSpec::required("icon"),
    ];

    fn into_insert(self) -> Result<NewService, ValidationError> {
        Ok(NewService {
            title: self.title,
            description: self.description,
            icon: self.icon,
        })
    }
}
