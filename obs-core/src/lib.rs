//! Core types for the environmental observatory API.
//!
//! - [`station`]: stations and water-network entities
//! - [`observation`]: `(periodo, valor)` points of a time series
//! - [`catalog`]: the static category → sub-metric → column table
//! - [`views`]: whole-table listings grouped into the `aire` and `agua` modules
//! - [`error`]: request-level error taxonomy

pub mod catalog;
pub mod error;
pub mod observation;
pub mod station;
pub mod views;

pub use catalog::{Category, Network, ParameterSource, SeriesKind, Source};
pub use error::CatalogError;
pub use observation::Observation;
pub use station::{Station, WaterEntity};
