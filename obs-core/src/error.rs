/// Error types for catalog lookups and station resolution
use thiserror::Error;

/// Request-level failures raised while resolving stations, categories and
/// sub-metrics. Store faults are not represented here; see `obs_db::QueryError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Missing or contradictory request parameters
    #[error("{0}")]
    BadRequest(String),

    /// Category name matched neither a label, a slug nor an alias
    #[error("Métrica no válida: {0}")]
    InvalidCategory(String),

    /// Sub-metric name is not part of the requested category
    #[error("Submétrica no válida: {0}")]
    InvalidSeriesKind(String),

    /// Station, entity or data subset absent
    #[error("{0}")]
    NotFound(String),

    /// A station name matched more than one station
    #[error("El nombre '{name}' coincide con {matches} estaciones; use estacion_id")]
    AmbiguousName { name: String, matches: usize },
}

/// Type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
