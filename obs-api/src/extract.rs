//! `Query` and `Path` extractors that reject with [`AppError`], so malformed
//! parameters get the same `{"detail": ...}` body as every other error.

use crate::error::AppError;
use axum::extract::FromRequestParts;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
