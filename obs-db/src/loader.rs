//! CSV data loading for populating the record store.
//!
//! Every loader takes CSV data with a header row. Header names are the
//! destination column names, so a fixture may carry any subset of a table's
//! columns in any order. Cells are typed by the declared type of their
//! column: empty cells become `NULL`, `TEXT` columns keep the raw string
//! (so a code like `007` survives), `INTEGER` and `REAL` columns must hold a
//! number. `NaN` in a numeric column is read as a missing value.
//!
//! # Example CSV
//! ```text
//! mes,estacion,temp_superficial_del_mar,nivel_medio_del_mar
//! 2020-01,Ancud,12.5,
//! 2020-02,Ancud,12.9,1.02
//! ```

use crate::schema;
use crate::Database;
use anyhow::{bail, Context};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

impl Database {
    /// Load rows into any schema table from a CSV string with headers.
    ///
    /// Returns the number of rows inserted. Rows with more fields than the
    /// header are skipped; missing trailing fields are stored as `NULL`.
    pub fn load_table(&self, table: &str, csv_data: &str) -> anyhow::Result<usize> {
        if !schema::TABLES.contains(&table) {
            bail!("unknown table '{}'", table);
        }
        let conn = self.conn()?;
        let known = table_columns(&conn, table)?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            bail!("CSV for '{}' has no header row", table);
        }
        let mut kinds = Vec::with_capacity(headers.len());
        for header in &headers {
            match known.iter().find(|(name, _)| name == header) {
                Some((_, kind)) => kinds.push(*kind),
                None => bail!("table '{}' has no column '{}'", table, header),
            }
        }

        // Column names were checked against PRAGMA table_info above.
        let sql = format!(
            "INSERT OR REPLACE INTO {} ({}) VALUES ({})",
            table,
            headers.join(", "),
            (1..=headers.len())
                .map(|i| format!("?{}", i))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let tx = conn.unchecked_transaction()?;
        let mut count = 0usize;
        let mut skipped = 0usize;
        {
            let mut stmt = tx.prepare(&sql)?;
            for result in rdr.records() {
                let r = result?;
                if r.len() > headers.len() {
                    skipped += 1;
                    continue;
                }
                let row = count + skipped + 1;
                let values = headers
                    .iter()
                    .zip(&kinds)
                    .enumerate()
                    .map(|(i, (header, kind))| {
                        parse_cell(r.get(i).unwrap_or(""), *kind).with_context(|| {
                            format!("row {} of '{}', column '{}'", row, table, header)
                        })
                    })
                    .collect::<anyhow::Result<Vec<Value>>>()?;
                stmt.execute(params_from_iter(values.iter()))
                    .with_context(|| format!("inserting row {} into '{}'", row, table))?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!(
            "loader: Loaded {} rows into {}, skipped {} malformed",
            count,
            table,
            skipped
        );
        Ok(count)
    }

    /// Load station metadata.
    ///
    /// Expected headers (any subset, `id` and `nombre` required by the table):
    /// `id,nombre,latitud,longitud,numero_region,nombre_region,descripcion`
    pub fn load_stations(&self, csv_data: &str) -> anyhow::Result<usize> {
        self.load_table("v_estaciones", csv_data)
    }

    /// Load water-network entities.
    ///
    /// Expected headers: `id,nombre,tipo,descripcion`
    pub fn load_water_entities(&self, csv_data: &str) -> anyhow::Result<usize> {
        self.load_table("v_entidades_agua", csv_data)
    }
}

/// Storage class of a column, from its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Real,
    Text,
}

impl ColumnKind {
    fn from_declared(declared: &str) -> Self {
        let declared = declared.to_ascii_uppercase();
        if declared.contains("INT") {
            ColumnKind::Integer
        } else if ["REAL", "FLOA", "DOUB"].iter().any(|t| declared.contains(t)) {
            ColumnKind::Real
        } else {
            ColumnKind::Text
        }
    }
}

fn table_columns(conn: &Connection, table: &str) -> anyhow::Result<Vec<(String, ColumnKind)>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| {
            let declared: String = row.get(2)?;
            Ok((row.get::<_, String>(1)?, ColumnKind::from_declared(&declared)))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

fn parse_cell(raw: &str, kind: ColumnKind) -> anyhow::Result<Value> {
    let cell = raw.trim();
    if cell.is_empty() {
        return Ok(Value::Null);
    }
    let value = match kind {
        ColumnKind::Text => Value::Text(cell.to_string()),
        ColumnKind::Integer => match cell.parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => number(cell)?,
        },
        ColumnKind::Real => number(cell)?,
    };
    Ok(value)
}

fn number(cell: &str) -> anyhow::Result<Value> {
    let f: f64 = cell
        .parse()
        .with_context(|| format!("'{}' is not a number", cell))?;
    Ok(if f.is_nan() { Value::Null } else { Value::Real(f) })
}
