//! Shared domain types for the chantier backend.
//!
//! Holds the closed enumerations, the wire and storage insert shapes, and the
//! strict validation layer that turns untrusted JSON into insert shapes. This
//! crate has no database or HTTP dependency.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;
