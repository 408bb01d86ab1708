//! Request extractors
//!
//! `ApiJson` is `axum::Json` with its rejection turned into an [`ApiError`].

use axum::extract::FromRequest;

use crate::api::error::ApiError;

/// JSON body extractor that rejects with [`ApiError::Validation`]
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
