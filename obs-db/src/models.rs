//! Result model structs returned by the query facade.
//!
//! All structs derive `Serialize`; their field names are the JSON field
//! names of the HTTP API.

use obs_core::Observation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Categories with data for a station (`/estaciones/metricas`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationMetrics {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Category labels in presentation order
    pub metricas_disponibles: Vec<String>,
}

/// Sub-metrics available for a station within one category
/// (`/estaciones/submetricas`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationSubmetrics {
    pub id: i64,
    pub nombre: String,
    /// Canonical label of the requested category
    pub metrica: String,
    pub submetricas_disponibles: Vec<String>,
}

/// A station time series (`/estaciones/datos-submetrica`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationSeries {
    pub id: i64,
    pub nombre: String,
    pub submetrica: String,
    pub datos: Vec<Observation>,
}

/// Sub-metrics of a water entity within one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntitySubmetrics {
    /// Category slug
    pub tipo: String,
    pub estacion: String,
    pub submetricas: Vec<String>,
}

/// A water entity time series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntitySeries {
    pub tipo: String,
    pub estacion: String,
    pub submetrica: String,
    pub datos: Vec<Observation>,
}

/// One raw row of a category's source table.
///
/// Value columns are flattened into the JSON object under their column
/// names, e.g. `{"periodo": "2020-01", "estacion": "Rio Maipo", "value": 12.5}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataRecord {
    pub periodo: String,
    pub estacion: String,
    /// Parameter name for parametric categories (metals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parametro: Option<String>,
    #[serde(flatten)]
    pub valores: BTreeMap<&'static str, Option<f64>>,
}

/// One stored cell of a listing row, serialized as its plain JSON value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// A whole-table listing row (`/aire/...`, `/agua/...`).
///
/// Serializes as a JSON object whose keys keep the column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub cells: Vec<(&'static str, Cell)>,
}

impl ViewRow {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| cell)
    }
}

impl Serialize for ViewRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, cell) in &self.cells {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}
