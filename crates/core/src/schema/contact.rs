//! Contact form shapes and their enumerations.

use serde::Deserialize;
use validator::Validate;

use super::{define_closed_enum, field_error};
use crate::validation::{FieldSpec, InsertShape, ValidationError};

define_closed_enum! {
    /// What the visitor is asking about (`typeDemande`).
    InquiryType("typeDemande") {
        ModelInfo = "info-modeles",
        PriceQuote = "demande-prix",
        AfterSales = "service-apres-vente",
        Other = "autre",
    }
}

define_closed_enum! {
    /// Kind of home the visitor is interested in (`typeMaison`).
    HomeType("typeMaison") {
        Modular = "maison-modulaire",
        SemiDetached = "maison-jumelee",
        Chalet = "chalet",
        MiniHome = "mini-maison",
    }
}

define_closed_enum! {
    /// Project horizon in months (`echeancier`).
    Timeline("echeancier") {
        ZeroToThree = "0-3",
        ThreeToSix = "3-6",
        SixToTwelve = "6-12",
        TwelvePlus = "12-plus",
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactMessageInput {
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub name: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(custom(function = "InquiryType::validate_slug"))]
    pub type_demande: String,
    #[validate(custom(function = "HomeType::validate_slug"))]
    pub type_maison: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub budget: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub region: String,
    #[validate(custom(function = "Timeline::validate_slug"))]
    pub echeancier: String,
    #[validate(custom(function = "crate::schema::non_empty"))]
    pub message: String,
}

/// Insert shape for `contact_messages`. `id` and `created_at` are assigned
/// by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub type_demande: InquiryType,
    pub type_maison: HomeType,
    pub budget: String,
    pub region: String,
    pub echeancier: Timeline,
    pub message: String,
}

impl InsertShape for ContactMessageInput {
    type Output = NewContactMessage;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name"),
        FieldSpec::required("email"),
        FieldSpec::optional("phone"),
        FieldSpec::required("typeDemande"),
        FieldSpec::required("typeMaison"),
        FieldSpec::required("budget"),
        FieldSpec::required("region"),
        FieldSpec::required("echeancier"),
        FieldSpec::required("message"),
    ];

    fn into_insert(self) -> Result<NewContactMessage, ValidationError> {
        Ok(NewContactMessage {
            type_demande: self.type_demande.parse().map_err(field_error("typeDemande"))?,
            type_maison: self.type_maison.parse().map_err(field_error("typeMaison"))?,
            echeancier: self.echeancier.parse().map_err(field_error("echeancier"))?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            budget: self.budget,
            region: self.region,
            message: self.message,
        })
    }
}
