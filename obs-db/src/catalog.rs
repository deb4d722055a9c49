//! Catalog index and series accessor over the record store.
//!
//! Category presence, sub-metric availability and series retrieval are all
//! answered from the static descriptors in `obs_core::catalog`. Table and
//! column names interpolated into SQL come only from those descriptors;
//! station names and parameter values are always bound.
//!
//! The free functions take a `&Connection` so a facade call can run all of
//! its reads on one pooled connection.

use crate::error::Result;
use crate::models::DataRecord;
use crate::Database;
use obs_core::catalog::{Category, Network, ParameterSource, SeriesKind, Source, ValueType};
use obs_core::{CatalogError, Observation};
use rusqlite::{params, Connection};
use std::collections::{BTreeMap, HashSet};

/// Minimum non-null observations for a declared sub-metric to be listed.
pub const MIN_OBSERVATIONS: i64 = 2;

/// A sub-metric resolved against the catalog, ready to be fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSelector {
    /// A declared value column
    Declared(&'static SeriesKind),
    /// One parameter value of a parametric category
    Parameter {
        category: Category,
        source: &'static ParameterSource,
        parameter: String,
    },
}

impl SeriesSelector {
    /// The sub-metric name as shown to clients.
    pub fn name(&self) -> &str {
        match self {
            SeriesSelector::Declared(kind) => kind.name,
            SeriesSelector::Parameter { parameter, .. } => parameter,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SeriesSelector::Declared(kind) => kind.category,
            SeriesSelector::Parameter { category, .. } => *category,
        }
    }
}

fn value_expr(column: &str, value_type: ValueType) -> String {
    match value_type {
        ValueType::Integer => format!("CAST({} AS REAL)", column),
        ValueType::Float => column.to_string(),
    }
}

fn has_rows(conn: &Connection, source: &Source, station: &str) -> Result<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
        source.table, source.station_column
    );
    let exists: bool = conn.query_row(&sql, params![station], |row| row.get(0))?;
    Ok(exists)
}

// ───────────────────── Catalog Index ─────────────────────

/// Categories of `network` with at least one row for the station, in
/// presentation order.
pub(crate) fn categories_for(
    conn: &Connection,
    network: Network,
    station: &str,
) -> Result<Vec<Category>> {
    let mut present = Vec::new();
    for category in network.categories() {
        for source in category.sources() {
            if has_rows(conn, source, station)? {
                present.push(category);
                break;
            }
        }
    }
    log::debug!(
        "catalog: {} has {} of {} {} categories",
        station,
        present.len(),
        network.categories().count(),
        network
    );
    Ok(present)
}

/// Available sub-metric names of `category` for the station.
///
/// Declared sub-metrics are listed when they have at least
/// [`MIN_OBSERVATIONS`] non-null values, in declaration order. Parametric
/// categories list the distinct non-null parameter values, sorted.
pub(crate) fn series_kinds_for(
    conn: &Connection,
    category: Category,
    station: &str,
) -> Result<Vec<String>> {
    if let Some(param) = category.parameter_source() {
        let sql = format!(
            "SELECT DISTINCT {p} FROM {t} WHERE {s} = ?1 AND {p} IS NOT NULL ORDER BY {p}",
            p = param.parameter_column,
            t = param.source.table,
            s = param.source.station_column,
        );
        let mut stmt = conn.prepare(&sql)?;
        let names = stmt
            .query_map(params![station], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        log::debug!(
            "catalog: {} parameters of {} for {}",
            names.len(),
            category,
            station
        );
        return Ok(names);
    }

    let mut available: HashSet<&'static str> = HashSet::new();
    for source in category.sources() {
        let kinds: Vec<&'static SeriesKind> = category
            .series_kinds()
            .filter(|k| std::ptr::eq(k.source, source))
            .collect();
        let counts = kinds
            .iter()
            .map(|k| format!("COUNT({})", k.column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            counts, source.table, source.station_column
        );
        conn.query_row(&sql, params![station], |row| {
            for (i, kind) in kinds.iter().enumerate() {
                let count: i64 = row.get(i)?;
                if count >= MIN_OBSERVATIONS {
                    available.insert(kind.name);
                }
            }
            Ok(())
        })?;
    }
    let names: Vec<String> = category
        .series_kinds()
        .filter(|k| available.contains(k.name))
        .map(|k| k.name.to_string())
        .collect();
    log::debug!(
        "catalog: {} of {} {} sub-metrics available for {}",
        names.len(),
        category.series_kinds().count(),
        category,
        station
    );
    Ok(names)
}

/// Resolve a sub-metric name within a category.
///
/// Declared names must match exactly. A parametric name is accepted when the
/// parameter occurs anywhere in the category's table.
pub(crate) fn resolve_in(
    conn: &Connection,
    category: Category,
    name: &str,
) -> Result<SeriesSelector> {
    if let Some(param) = category.parameter_source() {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
            param.source.table, param.parameter_column
        );
        let known: bool = conn.query_row(&sql, params![name], |row| row.get(0))?;
        if !known {
            return Err(CatalogError::InvalidSeriesKind(name.to_string()).into());
        }
        return Ok(SeriesSelector::Parameter {
            category,
            source: param,
            parameter: name.to_string(),
        });
    }
    category
        .find_series_kind(name)
        .map(SeriesSelector::Declared)
        .ok_or_else(|| CatalogError::InvalidSeriesKind(name.to_string()).into())
}

// ───────────────────── Series Accessor ─────────────────────

/// Non-null observations of the selected series for the station, ordered by
/// period. An empty series is a valid answer.
pub(crate) fn fetch(
    conn: &Connection,
    selector: &SeriesSelector,
    station: &str,
) -> Result<Vec<Observation>> {
    let rows = match selector {
        SeriesSelector::Declared(kind) => {
            let source = kind.source;
            let sql = format!(
                "SELECT CAST({p} AS TEXT), {v} FROM {t}
                 WHERE {s} = ?1 AND {c} IS NOT NULL
                 ORDER BY 1",
                p = source.period_column,
                v = value_expr(kind.column, kind.value_type),
                t = source.table,
                s = source.station_column,
                c = kind.column,
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![station], |row| {
                    Ok(Observation::new(row.get::<_, String>(0)?, row.get(1)?))
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
        SeriesSelector::Parameter {
            source, parameter, ..
        } => {
            let sql = format!(
                "SELECT CAST({p} AS TEXT), {v} FROM {t}
                 WHERE {s} = ?1 AND {param} = ?2 AND {c} IS NOT NULL
                 ORDER BY 1",
                p = source.source.period_column,
                v = value_expr(source.value_column, source.value_type),
                t = source.source.table,
                s = source.source.station_column,
                param = source.parameter_column,
                c = source.value_column,
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![station, parameter], |row| {
                    Ok(Observation::new(row.get::<_, String>(0)?, row.get(1)?))
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
    };
    if rows.is_empty() {
        log::debug!("series: no observations of '{}' for {}", selector.name(), station);
    }
    Ok(rows)
}

/// Raw rows of every source of `category` for the station, ordered by period
/// (then parameter for parametric categories).
pub(crate) fn records(
    conn: &Connection,
    category: Category,
    station: &str,
) -> Result<Vec<DataRecord>> {
    let mut out = Vec::new();
    if let Some(param) = category.parameter_source() {
        let source = param.source;
        let sql = format!(
            "SELECT CAST({p} AS TEXT), {s}, {param}, {v} FROM {t}
             WHERE {s} = ?1
             ORDER BY 1, 3",
            p = source.period_column,
            s = source.station_column,
            param = param.parameter_column,
            v = value_expr(param.value_column, param.value_type),
            t = source.table,
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![station], |row| {
                let mut valores = BTreeMap::new();
                valores.insert(param.value_column, row.get::<_, Option<f64>>(3)?);
                Ok(DataRecord {
                    periodo: row.get(0)?,
                    estacion: row.get(1)?,
                    parametro: row.get(2)?,
                    valores,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        out.extend(rows);
    } else {
        for source in category.sources() {
            let kinds: Vec<&'static SeriesKind> = category
                .series_kinds()
                .filter(|k| std::ptr::eq(k.source, source))
                .collect();
            let values = kinds
                .iter()
                .map(|k| value_expr(k.column, k.value_type))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                "SELECT CAST({p} AS TEXT), {s}, {values} FROM {t}
                 WHERE {s} = ?1
                 ORDER BY 1",
                p = source.period_column,
                s = source.station_column,
                t = source.table,
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![station], |row| {
                    let mut valores = BTreeMap::new();
                    for (i, kind) in kinds.iter().enumerate() {
                        valores.insert(kind.column, row.get::<_, Option<f64>>(i + 2)?);
                    }
                    Ok(DataRecord {
                        periodo: row.get(0)?,
                        estacion: row.get(1)?,
                        parametro: None,
                        valores,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            out.extend(rows);
        }
    }
    log::debug!(
        "query: records of {} for {} returned {} records",
        category,
        station,
        out.len()
    );
    Ok(out)
}

impl Database {
    /// Categories of `network` with data for the station name.
    pub fn list_categories(&self, network: Network, station: &str) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        categories_for(&conn, network, station)
    }

    /// Available sub-metric names of a category for the station name.
    pub fn list_series_kinds(&self, category: Category, station: &str) -> Result<Vec<String>> {
        let conn = self.conn()?;
        series_kinds_for(&conn, category, station)
    }

    /// Resolve a sub-metric name within a category.
    pub fn resolve_series(&self, category: Category, name: &str) -> Result<SeriesSelector> {
        let conn = self.conn()?;
        resolve_in(&conn, category, name)
    }

    /// Ordered non-null observations of a resolved series for the station name.
    pub fn fetch_series(
        &self,
        selector: &SeriesSelector,
        station: &str,
    ) -> Result<Vec<Observation>> {
        let conn = self.conn()?;
        fetch(&conn, selector, station)
    }

    /// Raw category rows for the station name.
    pub fn fetch_records(&self, category: Category, station: &str) -> Result<Vec<DataRecord>> {
        let conn = self.conn()?;
        records(&conn, category, station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryError;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_table(
            "v_mar_mensual",
            "mes,estacion,temp_superficial_del_mar,nivel_medio_del_mar\n\
             2020-02,Ancud,12.9,\n\
             2020-01,Ancud,12.5,1.01\n\
             2020-03,Ancud,,\n\
             2020-01,Valparaiso,14.0,0.98\n\
             2020-02,Valparaiso,14.2,0.99\n",
        )
        .unwrap();
        db.load_table(
            "v_temperatura",
            "mes,estacion,temp_max_absoluta,temp_med\n\
             2020-01,Ancud,22.0,14.0\n",
        )
        .unwrap();
        db.load_table(
            "v_mp25_anual",
            "anio,estacion,mp25_max_hor_anual,mp25_perc98\n\
             2019,Quintero,80.5,41\n\
             2018,Quintero,75.0,39\n",
        )
        .unwrap();
        db.load_table(
            "metales_totales_en_la_matriz_sedimentaria",
            "dia,estaciones_poal,parametros_poal,value\n\
             2019-05-02,Bahia Quintero,Zinc,120.5\n\
             2019-05-02,Bahia Quintero,Cobre,88.1\n\
             2019-11-20,Bahia Quintero,Cobre,90.3\n\
             2019-11-20,Bahia Quintero,,1.0\n\
             2019-11-20,Caleta Loncura,Plomo,5.5\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn categories_require_at_least_one_row() {
        let db = sample_db();
        let categories = db.list_categories(Network::Estaciones, "Ancud").unwrap();
        assert_eq!(
            categories,
            vec![Category::Temperatura, Category::EstacionOceanografica]
        );
        let quintero = db.list_categories(Network::Estaciones, "Quintero").unwrap();
        assert_eq!(quintero, vec![Category::Contaminantes]);
        assert!(db.list_categories(Network::Estaciones, "Nadie").unwrap().is_empty());
    }

    #[test]
    fn sub_metric_needs_two_non_null_observations() {
        let db = sample_db();
        // Temp has 2 non-null values, level has 1.
        let kinds = db
            .list_series_kinds(Category::EstacionOceanografica, "Ancud")
            .unwrap();
        assert_eq!(kinds, vec!["Temp Superficial Del Mar"]);
        // Single-row categories list nothing.
        assert!(db
            .list_series_kinds(Category::Temperatura, "Ancud")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sub_metric_boundary_one_versus_two() {
        let db = Database::new().unwrap();
        db.load_table("v_mar_mensual", "mes,estacion,nivel_medio_del_mar\n2020-01,X,1.0\n")
            .unwrap();
        assert!(db
            .list_series_kinds(Category::EstacionOceanografica, "X")
            .unwrap()
            .is_empty());
        db.load_table("v_mar_mensual", "mes,estacion,nivel_medio_del_mar\n2020-02,X,1.1\n")
            .unwrap();
        assert_eq!(
            db.list_series_kinds(Category::EstacionOceanografica, "X").unwrap(),
            vec!["Nivel Medio Del Mar"]
        );
    }

    #[test]
    fn sub_metrics_keep_declaration_order_across_sources() {
        let db = sample_db();
        let kinds = db.list_series_kinds(Category::Contaminantes, "Quintero").unwrap();
        assert_eq!(kinds, vec!["Mp25 Max Hor Anual", "Mp25 Perc98"]);
    }

    #[test]
    fn parametric_sub_metrics_are_distinct_sorted_non_null() {
        let db = sample_db();
        let kinds = db
            .list_series_kinds(Category::MetalesSedimentaria, "Bahia Quintero")
            .unwrap();
        assert_eq!(kinds, vec!["Cobre", "Zinc"]);
    }

    #[test]
    fn fetch_orders_by_period_and_skips_nulls() {
        let db = sample_db();
        let selector = db
            .resolve_series(Category::EstacionOceanografica, "Temp Superficial Del Mar")
            .unwrap();
        let series = db.fetch_series(&selector, "Ancud").unwrap();
        assert_eq!(
            series,
            vec![Observation::new("2020-01", 12.5), Observation::new("2020-02", 12.9)]
        );
        assert!(Observation::is_ordered(&series));
    }

    #[test]
    fn fetch_widens_integers_and_stringifies_years() {
        let db = sample_db();
        let selector = db.resolve_series(Category::Contaminantes, "Mp25 Perc98").unwrap();
        let series = db.fetch_series(&selector, "Quintero").unwrap();
        assert_eq!(
            series,
            vec![Observation::new("2018", 39.0), Observation::new("2019", 41.0)]
        );
    }

    #[test]
    fn fetch_is_idempotent() {
        let db = sample_db();
        let selector = db
            .resolve_series(Category::EstacionOceanografica, "Temp Superficial Del Mar")
            .unwrap();
        let first = db.fetch_series(&selector, "Valparaiso").unwrap();
        let second = db.fetch_series(&selector, "Valparaiso").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fetch_without_rows_is_empty_not_error() {
        let db = sample_db();
        let selector = db
            .resolve_series(Category::EstacionOceanografica, "Nivel Medio Del Mar")
            .unwrap();
        assert!(db.fetch_series(&selector, "Nadie").unwrap().is_empty());
    }

    #[test]
    fn every_listed_sub_metric_can_be_fetched() {
        let db = sample_db();
        for (category, station) in [
            (Category::EstacionOceanografica, "Ancud"),
            (Category::EstacionOceanografica, "Valparaiso"),
            (Category::Contaminantes, "Quintero"),
            (Category::MetalesSedimentaria, "Bahia Quintero"),
        ] {
            for name in db.list_series_kinds(category, station).unwrap() {
                let selector = db.resolve_series(category, &name).unwrap();
                let series = db.fetch_series(&selector, station).unwrap();
                assert!(!series.is_empty(), "{} listed but empty for {}", name, station);
            }
        }
    }

    #[test]
    fn parametric_fetch_filters_by_parameter() {
        let db = sample_db();
        let selector = db.resolve_series(Category::MetalesSedimentaria, "Cobre").unwrap();
        assert_eq!(selector.name(), "Cobre");
        let series = db.fetch_series(&selector, "Bahia Quintero").unwrap();
        assert_eq!(
            series,
            vec![Observation::new("2019-05-02", 88.1), Observation::new("2019-11-20", 90.3)]
        );
    }

    #[test]
    fn unknown_sub_metric_is_rejected() {
        let db = sample_db();
        let err = db
            .resolve_series(Category::EstacionOceanografica, "Salinidad")
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::Catalog(CatalogError::InvalidSeriesKind(ref name)) if name == "Salinidad"
        ));
        assert!(db
            .resolve_series(Category::MetalesSedimentaria, "Oro")
            .is_err());
        // Names from another category are not accepted.
        assert!(db.resolve_series(Category::Temperatura, "Nivel Medio Del Mar").is_err());
    }

    #[test]
    fn records_include_all_value_columns() {
        let db = sample_db();
        let rows = db
            .fetch_records(Category::EstacionOceanografica, "Ancud")
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].periodo, "2020-01");
        assert_eq!(rows[0].valores.get("nivel_medio_del_mar"), Some(&Some(1.01)));
        assert_eq!(rows[1].valores.get("nivel_medio_del_mar"), Some(&None));
        assert_eq!(rows[2].valores.get("temp_superficial_del_mar"), Some(&None));
    }

    #[test]
    fn parametric_records_carry_parameter() {
        let db = sample_db();
        let rows = db
            .fetch_records(Category::MetalesSedimentaria, "Bahia Quintero")
            .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].parametro.as_deref(), Some("Cobre"));
        assert_eq!(rows[1].parametro.as_deref(), Some("Zinc"));
        assert_eq!(rows[2].parametro, None);
    }
}
