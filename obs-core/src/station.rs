use serde::{Deserialize, Serialize};

/// A monitoring station of the air, meteorological and oceanographic
/// networks (`v_estaciones`).
///
/// The `nombre` field is the join key into every station-keyed series table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Surrogate identifier, unique across stations
    pub id: i64,
    /// Station name as used by the series tables (e.g., "Ancud")
    pub nombre: String,
    /// Latitude in decimal degrees
    pub latitud: Option<f64>,
    /// Longitude in decimal degrees
    pub longitud: Option<f64>,
    /// Administrative region number (1-16)
    pub numero_region: Option<i64>,
    /// Administrative region name
    pub nombre_region: Option<String>,
    pub descripcion: Option<String>,
}

/// An entity of the water network (`v_entidades_agua`): fluviometric and
/// meteorological stations, reservoirs, wells, snow courses, POAL sampling
/// points and glacier basins.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaterEntity {
    pub id: i64,
    /// Entity name as used by the water tables
    pub nombre: String,
    /// Entity kind as loaded from the source (e.g., "embalse", "pozo")
    pub tipo: String,
    pub descripcion: Option<String>,
}
