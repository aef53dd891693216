//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate request bodies at the boundary, delegate to
//! [`Storage`](chantier_db::Storage) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod project;
pub mod rendez_vous;
pub mod service;
