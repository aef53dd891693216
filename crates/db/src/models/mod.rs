//! Row types returned by the repositories.
//!
//! Rows serialize with camelCase keys, which is the JSON the API returns.
//! Insert shapes live in [`chantier_core::schema`].

pub mod contact_message;
pub mod project;
pub mod rendez_vous_request;
pub mod service;
