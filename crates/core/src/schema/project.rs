//! Portfolio project shapes.
//!
//! Projects are created by the seed routine or direct storage calls only;
//! there is no HTTP endpoint that accepts a [`ProjectInput`].

use serde::Deserialize;
use validator::Validate;

use crate::validation::{FieldSpec, InsertShape, ValidationError};

/// Client-facing project payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectInput {
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub title: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub description: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub image_url: String,
    /// Free-form label such as "New Build" or "Renovation".
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub category: String,
    pub location: Option<String>,
    /// Display string ("2024"), not a machine date.
    pub completion_date: Option<String>,
}

/// Insert shape for the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub location: Option<String>,
    pub completion_date: Option<String>,
}

impl InsertShape for ProjectInput {
    type Output = NewProject;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title"),
        FieldSpec::required("description"),
        FieldSpec::required("imageUrl"),
        FieldSpec::required("category"),
        FieldSpec::optional("location"),
        FieldSpec::optional("completionDate"),
    ];

    fn into_insert(self) -> Result<NewProject, ValidationError> {
        Ok(NewProject {
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            location: self.location,
            completion_date: self.completion_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_insert;
    use serde_json::json;

    #[test]
    fn optional_fields_may_be_absent() {
        let project = validate_insert::<ProjectInput>(json!({
            "title": "Lakeside Custom Home",
            "description": "Design and build.",
            "imageUrl": "https://example.com/lake.jpg",
            "category": "New Build",
        }))
        .unwrap();
        assert_eq!(project.category, "New Build");
        assert_eq!(project.location, None);
        assert_eq!(project.completion_date, None);
    }

    #[test]
    fn empty_required_fields_are_each_reported() {
        let err = validate_insert::<ProjectInput>(json!({
            "title": "",
            "description": "",
            "imageUrl": "https://example.com/x.jpg",
            "category": "Renovation",
            "location": "",
        }))
        .unwrap_err();
        let fields: Vec<&str> = err.fields().collect();
        assert_eq!(fields, vec!["description", "title"]);
    }
}
