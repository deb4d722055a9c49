//! Typed listing queries for stations and water-network entities.

use crate::error::Result;
use crate::Database;
use obs_core::{Station, WaterEntity};
use rusqlite::{params, Row};

pub(crate) const STATION_COLUMNS: &str =
    "id, nombre, latitud, longitud, numero_region, nombre_region, descripcion";

pub(crate) const ENTITY_COLUMNS: &str = "id, nombre, tipo, descripcion";

pub(crate) fn station_from_row(row: &Row<'_>) -> rusqlite::Result<Station> {
    Ok(Station {
        id: row.get(0)?,
        nombre: row.get(1)?,
        latitud: row.get(2)?,
        longitud: row.get(3)?,
        numero_region: row.get(4)?,
        nombre_region: row.get(5)?,
        descripcion: row.get(6)?,
    })
}

pub(crate) fn entity_from_row(row: &Row<'_>) -> rusqlite::Result<WaterEntity> {
    Ok(WaterEntity {
        id: row.get(0)?,
        nombre: row.get(1)?,
        tipo: row.get(2)?,
        descripcion: row.get(3)?,
    })
}

impl Database {
    // ───────────────────── Station Queries ─────────────────────

    /// All stations ordered by name.
    pub fn list_stations(&self) -> Result<Vec<Station>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_estaciones ORDER BY nombre, id",
            STATION_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], station_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("query: list_stations returned {} records", rows.len());
        Ok(rows)
    }

    pub fn station_by_id(&self, id: i64) -> Result<Option<Station>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_estaciones WHERE id = ?1",
            STATION_COLUMNS
        ))?;
        let mut rows = stmt.query_map(params![id], station_from_row)?;
        let station = rows.next().transpose()?;
        Ok(station)
    }

    /// Stations whose name matches exactly. More than one match means the
    /// name is ambiguous.
    pub fn stations_by_name(&self, nombre: &str) -> Result<Vec<Station>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_estaciones WHERE nombre = ?1 ORDER BY id",
            STATION_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![nombre], station_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!(
            "query: stations_by_name({}) returned {} records",
            nombre,
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Water Entity Queries ─────────────────────

    /// All water entities ordered by tipo, then name.
    pub fn list_water_entities(&self) -> Result<Vec<WaterEntity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_entidades_agua ORDER BY tipo, nombre, id",
            ENTITY_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], entity_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("query: list_water_entities returned {} records", rows.len());
        Ok(rows)
    }

    pub fn water_entities_by_tipo(&self, tipo: &str) -> Result<Vec<WaterEntity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_entidades_agua WHERE tipo = ?1 ORDER BY nombre, id",
            ENTITY_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![tipo], entity_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!(
            "query: water_entities_by_tipo({}) returned {} records",
            tipo,
            rows.len()
        );
        Ok(rows)
    }

    pub fn water_entities_by_name(&self, nombre: &str) -> Result<Vec<WaterEntity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM v_entidades_agua WHERE nombre = ?1 ORDER BY id",
            ENTITY_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![nombre], entity_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct entity tipos, sorted.
    pub fn water_entity_tipos(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT tipo FROM v_entidades_agua ORDER BY tipo")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        log::debug!("query: water_entity_tipos returned {} records", rows.len());
        Ok(rows)
    }
}
