//! Seed a SQLite file from a directory of CSV fixtures.

use anyhow::Context;
use log::{debug, info};
use obs_db::schema::TABLES;
use obs_db::{Database, PoolConfig};
use std::path::Path;

/// Load `<dir>/<table>.csv` for every schema table that has a file.
///
/// Tables are visited in schema order, entity tables first. Returns the
/// number of rows loaded per table.
pub fn seed_database(db: &Database, dir: &Path) -> anyhow::Result<Vec<(&'static str, usize)>> {
    let mut loaded = Vec::new();
    for &table in TABLES {
        let path = dir.join(format!("{}.csv", table));
        if !path.is_file() {
            debug!("seed: no fixture for {}", table);
            continue;
        }
        let csv = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let rows = db
            .load_table(table, &csv)
            .with_context(|| format!("loading {}", path.display()))?;
        info!("seed: {} rows into {}", rows, table);
        loaded.push((table, rows));
    }
    Ok(loaded)
}

pub fn run_seed(database: &str, fixtures: &str) -> anyhow::Result<()> {
    let dir = Path::new(fixtures);
    if !dir.is_dir() {
        anyhow::bail!("fixtures directory '{}' not found", fixtures);
    }
    let db = Database::open(database, PoolConfig::single())?;
    let loaded = seed_database(&db, dir)?;
    let total: usize = loaded.iter().map(|(_, n)| n).sum();
    info!(
        "seed complete: {} rows in {} tables into {}",
        total,
        loaded.len(),
        database
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
    }

    #[test]
    fn seeds_every_fixture() {
        let db = Database::new().unwrap();
        let loaded = seed_database(&db, &fixtures_dir()).unwrap();

        assert_eq!(loaded[0], ("v_estaciones", 4));
        assert_eq!(loaded[1], ("v_entidades_agua", 5));
        assert!(loaded.contains(&("v_mar_mensual", 6)));
        assert_eq!(db.list_stations().unwrap().len(), 4);

        let sub = db
            .station_submetrics(None, Some("Valparaíso"), Some("oceanografica"))
            .unwrap();
        assert_eq!(sub.submetricas_disponibles.len(), 2);
    }

    #[test]
    fn reseeding_replaces_keyed_rows() {
        let db = Database::new().unwrap();
        let first = seed_database(&db, &fixtures_dir()).unwrap();
        let second = seed_database(&db, &fixtures_dir()).unwrap();
        assert_eq!(first, second);
        assert_eq!(db.list_stations().unwrap().len(), 4);

        let rows = db.entity_records("Pozo Lo Aguirre", "pozo").unwrap();
        assert_eq!(rows.len(), 2);
        let rows = db.entity_records("Bahia Quintero", "metales_acuosa").unwrap();
        assert_eq!(rows.len(), 4);

        let embalse = db
            .entity_series(
                "embalse",
                "Embalse Rapel",
                Some("Volumen Del Embalse Por Embalse"),
            )
            .unwrap();
        assert_eq!(embalse.datos.len(), 2);

        let zinc = db
            .entity_series("metales_acuosa", "Bahia Quintero", Some("Zinc"))
            .unwrap();
        assert_eq!(zinc.datos.len(), 1);

        let sub = db
            .station_submetrics(None, Some("Quintero"), Some("Contaminantes"))
            .unwrap();
        assert!(sub.submetricas_disponibles.contains(&"Mp25 Perc98".to_string()));
        let coyhaique = db
            .station_submetrics(None, Some("Coyhaique"), Some("Contaminantes"))
            .unwrap();
        assert!(coyhaique.submetricas_disponibles.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(run_seed(":memory:", "/nonexistent/fixtures").is_err());
    }
}
