//! Request-level operations behind the discovery endpoints.
//!
//! Each method validates its arguments before touching the store, then runs
//! every read on a single pooled connection, released when the method
//! returns on any path.

use crate::catalog::{
    categories_for, fetch, records, resolve_in, series_kinds_for, SeriesSelector,
};
use crate::error::Result;
use crate::models::{
    DataRecord, EntitySeries, EntitySubmetrics, StationMetrics, StationSeries, StationSubmetrics,
};
use crate::queries::{entity_from_row, station_from_row, ENTITY_COLUMNS, STATION_COLUMNS};
use crate::Database;
use obs_core::catalog::Network;
use obs_core::{CatalogError, Category, Observation, Station, WaterEntity};
use rusqlite::{params, Connection};

/// How a station was identified by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StationKey<'a> {
    Id(i64),
    Name(&'a str),
}

fn station_key<'a>(id: Option<i64>, nombre: Option<&'a str>) -> Result<StationKey<'a>> {
    let nombre = nombre.map(str::trim).filter(|n| !n.is_empty());
    match (id, nombre) {
        (Some(id), None) => Ok(StationKey::Id(id)),
        (None, Some(nombre)) => Ok(StationKey::Name(nombre)),
        (None, None) => Err(CatalogError::BadRequest(
            "Debe proporcionar estacion_id o nombre".to_string(),
        )
        .into()),
        (Some(_), Some(_)) => Err(CatalogError::BadRequest(
            "Proporcione solo uno de estacion_id o nombre".to_string(),
        )
        .into()),
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CatalogError::BadRequest(format!("Falta el parámetro '{}'", name)).into())
}

fn load_station(conn: &Connection, key: StationKey<'_>) -> Result<Station> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM v_estaciones
         WHERE (?1 IS NOT NULL AND id = ?1) OR (?2 IS NOT NULL AND nombre = ?2)
         ORDER BY id",
        STATION_COLUMNS
    ))?;
    let (id, nombre) = match key {
        StationKey::Id(id) => (Some(id), None),
        StationKey::Name(nombre) => (None, Some(nombre)),
    };
    let matches = stmt
        .query_map(params![id, nombre], station_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    single(matches, |station| station.nombre.clone(), || match key {
        StationKey::Id(id) => format!("Estación con id {} no encontrada", id),
        StationKey::Name(nombre) => format!("Estación '{}' no encontrada", nombre),
    })
}

fn load_water_entity(conn: &Connection, nombre: &str) -> Result<WaterEntity> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM v_entidades_agua WHERE nombre = ?1 ORDER BY id",
        ENTITY_COLUMNS
    ))?;
    let matches = stmt
        .query_map(params![nombre], entity_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    single(matches, |entity| entity.nombre.clone(), || {
        format!("Entidad de agua '{}' no encontrada", nombre)
    })
}

/// The only element of `matches`; none is `NotFound`, several is
/// `AmbiguousName`.
fn single<T>(
    matches: Vec<T>,
    name_of: impl Fn(&T) -> String,
    not_found: impl FnOnce() -> String,
) -> Result<T> {
    let count = matches.len();
    let mut matches = matches.into_iter();
    match (matches.next(), count) {
        (None, _) => Err(CatalogError::NotFound(not_found()).into()),
        (Some(only), 1) => Ok(only),
        (Some(first), n) => Err(CatalogError::AmbiguousName {
            name: name_of(&first),
            matches: n,
        }
        .into()),
    }
}

/// Log an empty series only when the catalog lists its sub-metric as
/// available for the entity, which means the two disagree.
fn check_empty(
    conn: &Connection,
    datos: &[Observation],
    category: Category,
    name: &str,
    station: &str,
) -> Result<()> {
    if !datos.is_empty() {
        log::debug!("series: '{}' for {} returned {} records", name, station, datos.len());
        return Ok(());
    }
    if series_kinds_for(conn, category, station)?.iter().any(|k| k == name) {
        log::warn!(
            "series: '{}' listed as available for {} but returned no observations",
            name,
            station
        );
    }
    Ok(())
}

impl Database {
    // ───────────────────── Stations ─────────────────────

    /// Resolve a station from exactly one of id or name.
    ///
    /// Missing or duplicated identifiers fail with `BadRequest` before the
    /// store is touched. A name shared by several stations is rejected as
    /// ambiguous rather than resolved to an arbitrary one.
    pub fn resolve_station(&self, id: Option<i64>, nombre: Option<&str>) -> Result<Station> {
        let key = station_key(id, nombre)?;
        let conn = self.conn()?;
        load_station(&conn, key)
    }

    /// Categories with data for a station.
    pub fn station_metrics(&self, id: Option<i64>, nombre: Option<&str>) -> Result<StationMetrics> {
        let key = station_key(id, nombre)?;
        let conn = self.conn()?;
        let station = load_station(&conn, key)?;
        let categories = categories_for(&conn, Network::Estaciones, &station.nombre)?;
        Ok(StationMetrics {
            id: station.id,
            nombre: station.nombre,
            descripcion: station.descripcion,
            metricas_disponibles: categories.iter().map(|c| c.label().to_string()).collect(),
        })
    }

    /// Available sub-metrics of one category for a station.
    pub fn station_submetrics(
        &self,
        id: Option<i64>,
        nombre: Option<&str>,
        metrica: Option<&str>,
    ) -> Result<StationSubmetrics> {
        let key = station_key(id, nombre)?;
        let category = Network::Estaciones.parse_category(required(metrica, "metrica")?)?;
        let conn = self.conn()?;
        let station = load_station(&conn, key)?;
        let submetricas = series_kinds_for(&conn, category, &station.nombre)?;
        Ok(StationSubmetrics {
            id: station.id,
            nombre: station.nombre,
            metrica: category.label().to_string(),
            submetricas_disponibles: submetricas,
        })
    }

    /// Time series of one sub-metric for a station. The sub-metric is looked
    /// up by exact name across all station categories.
    pub fn station_series(
        &self,
        id: Option<i64>,
        nombre: Option<&str>,
        submetrica: Option<&str>,
    ) -> Result<StationSeries> {
        let key = station_key(id, nombre)?;
        let name = required(submetrica, "submetrica")?;
        let kind = Network::Estaciones
            .find_series_kind(name)
            .ok_or_else(|| CatalogError::InvalidSeriesKind(name.to_string()))?;
        let conn = self.conn()?;
        let station = load_station(&conn, key)?;
        let datos = fetch(&conn, &SeriesSelector::Declared(kind), &station.nombre)?;
        check_empty(&conn, &datos, kind.category, kind.name, &station.nombre)?;
        Ok(StationSeries {
            id: station.id,
            nombre: station.nombre,
            submetrica: kind.name.to_string(),
            datos,
        })
    }

    // ───────────────────── Water Entities ─────────────────────

    /// Resolve a water entity by exact name.
    pub fn resolve_water_entity(&self, nombre: &str) -> Result<WaterEntity> {
        let conn = self.conn()?;
        load_water_entity(&conn, nombre)
    }

    /// Slugs of the water categories with data for an entity.
    pub fn entity_metrics(&self, nombre: &str) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let entity = load_water_entity(&conn, nombre)?;
        let categories = categories_for(&conn, Network::EntidadesAgua, &entity.nombre)?;
        Ok(categories.iter().map(|c| c.slug().to_string()).collect())
    }

    /// Available sub-metrics of one water category for an entity.
    pub fn entity_submetrics(&self, tipo: &str, nombre: &str) -> Result<EntitySubmetrics> {
        let category = Network::EntidadesAgua.parse_category(tipo)?;
        let conn = self.conn()?;
        let entity = load_water_entity(&conn, nombre)?;
        let submetricas = series_kinds_for(&conn, category, &entity.nombre)?;
        Ok(EntitySubmetrics {
            tipo: category.slug().to_string(),
            estacion: entity.nombre,
            submetricas,
        })
    }

    /// Time series of one sub-metric of a water category for an entity.
    pub fn entity_series(
        &self,
        tipo: &str,
        nombre: &str,
        submetrica: Option<&str>,
    ) -> Result<EntitySeries> {
        let category = Network::EntidadesAgua.parse_category(tipo)?;
        let name = required(submetrica, "submetrica")?;
        let conn = self.conn()?;
        let selector = resolve_in(&conn, category, name)?;
        let entity = load_water_entity(&conn, nombre)?;
        let datos = fetch(&conn, &selector, &entity.nombre)?;
        check_empty(&conn, &datos, category, selector.name(), &entity.nombre)?;
        Ok(EntitySeries {
            tipo: category.slug().to_string(),
            estacion: entity.nombre,
            submetrica: selector.name().to_string(),
            datos,
        })
    }

    /// Raw rows of one water category for an entity. An empty result is
    /// reported as `NotFound`.
    pub fn entity_records(&self, nombre: &str, tipo: &str) -> Result<Vec<DataRecord>> {
        let category = Network::EntidadesAgua.parse_category(tipo)?;
        let conn = self.conn()?;
        let entity = load_water_entity(&conn, nombre)?;
        let rows = records(&conn, category, &entity.nombre)?;
        if rows.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "Sin datos de {} para '{}'",
                category.slug(),
                entity.nombre
            ))
            .into());
        }
        Ok(rows)
    }

    /// Water entities of one tipo. An empty result is reported as `NotFound`.
    pub fn entities_of_tipo(&self, tipo: &str) -> Result<Vec<WaterEntity>> {
        let rows = self.water_entities_by_tipo(tipo)?;
        if rows.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No hay entidades de agua de tipo '{}'",
                tipo
            ))
            .into());
        }
        Ok(rows)
    }

    /// A station by id, or `NotFound`.
    pub fn station(&self, id: i64) -> Result<Station> {
        self.station_by_id(id)?.ok_or_else(|| {
            CatalogError::NotFound(format!("Estación con id {} no encontrada", id)).into()
        })
    }

    /// A station by exact name, or `NotFound`. Ambiguous names are rejected.
    pub fn station_named(&self, nombre: &str) -> Result<Station> {
        self.resolve_station(None, Some(nombre))
    }
}
