//! Extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's built-in `Json` and `Path` reject with plain-text bodies. These
//! wrappers route the same failures through [`AppError`] so every error the
//! API returns carries a `message` field.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Missing `Content-Type` maps to 415, malformed JSON to 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. A value that fails to parse (e.g. a non-numeric id) maps to 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
