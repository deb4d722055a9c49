//! Mapping of facade errors onto HTTP responses.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use obs_core::CatalogError;
use obs_db::QueryError;
use serde_json::json;
use thiserror::Error;

/// Error returned by every handler
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Malformed query string, e.g. a non-numeric `estacion_id`
    #[error("Parámetros de consulta inválidos: {}", .0.body_text())]
    BadQuery(#[from] QueryRejection),

    #[error("Ruta inválida: {}", .0.body_text())]
    BadPath(#[from] PathRejection),

    /// The blocking task running the query panicked or was cancelled
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Query(QueryError::Catalog(e)) => match e {
                CatalogError::BadRequest(_)
                | CatalogError::InvalidCategory(_)
                | CatalogError::InvalidSeriesKind(_)
                | CatalogError::AmbiguousName { .. } => StatusCode::BAD_REQUEST,
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            },
            AppError::BadQuery(_) => StatusCode::BAD_REQUEST,
            AppError::BadPath(e) => e.status(),
            AppError::Query(QueryError::Store(_))
            | AppError::Query(QueryError::PoolTimeout(_))
            | AppError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            log::error!("request failed: {}", self);
            "Error interno del servidor".to_string()
        } else {
            log::debug!("request rejected ({}): {}", status, self);
            self.to_string()
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Query(QueryError::Catalog(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn request_errors_map_to_client_statuses() {
        let cases = [
            (CatalogError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (CatalogError::InvalidCategory("Foo".into()), StatusCode::BAD_REQUEST),
            (CatalogError::InvalidSeriesKind("Bar".into()), StatusCode::BAD_REQUEST),
            (
                CatalogError::AmbiguousName {
                    name: "X".into(),
                    matches: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (CatalogError::NotFound("x".into()), StatusCode::NOT_FOUND),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn pool_timeout_is_server_error_without_details() {
        let timeout = AppError::Query(QueryError::PoolTimeout(Duration::from_secs(5)));
        assert_eq!(timeout.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = timeout.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
