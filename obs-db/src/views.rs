//! Whole-table listings for the `/aire` and `/agua` routes.

use crate::error::Result;
use crate::models::{Cell, ViewRow};
use crate::Database;
use obs_core::views::View;
use rusqlite::types::ValueRef;
use rusqlite::Row;

fn cell_at(row: &Row<'_>, index: usize) -> rusqlite::Result<Cell> {
    Ok(match row.get_ref(index)? {
        ValueRef::Null => Cell::Null,
        ValueRef::Integer(i) => Cell::Integer(i),
        ValueRef::Real(f) => Cell::Real(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Cell::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    })
}

impl Database {
    /// Every row of a view's table, ordered by period then station.
    pub fn list_view(&self, view: &View) -> Result<Vec<ViewRow>> {
        let columns = view.columns();
        let source = view.source;
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}, {}",
            columns.join(", "),
            source.table,
            source.period_column,
            source.station_column
        );
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                let cells = columns
                    .iter()
                    .enumerate()
                    .map(|(i, &name)| Ok((name, cell_at(row, i)?)))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(ViewRow { cells })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("query: {} returned {} records", view.route(), rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obs_core::views::{Module, VIEWS};

    fn view(module: Module, path: &str) -> &'static View {
        View::find(module, path).unwrap()
    }

    #[test]
    fn every_view_selects_existing_columns() {
        let db = Database::new().unwrap();
        for view in VIEWS {
            let rows = db.list_view(view).unwrap();
            assert!(rows.is_empty(), "{} should start empty", view.route());
        }
    }

    #[test]
    fn yearly_rows_keep_integer_years_and_nulls() {
        let db = Database::new().unwrap();
        db.load_table(
            "v_mp25_anual",
            "anio,estacion,mp25_perc50,mp25_perc98\n\
             2019,Quintero,13.0,38\n\
             2018,Quintero,14.0,41\n\
             2019,Coyhaique,38.0,\n",
        )
        .unwrap();

        let rows = db.list_view(view(Module::Aire, "mp25/anual")).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get("anio"), Some(&Cell::Integer(2018)));
        assert_eq!(rows[1].get("estacion"), Some(&Cell::Text("Coyhaique".into())));
        assert_eq!(rows[1].get("mp25_perc98"), Some(&Cell::Null));
        assert_eq!(rows[2].get("mp25_perc98"), Some(&Cell::Integer(38)));
        assert_eq!(rows[2].get("mp25_perc50"), Some(&Cell::Real(13.0)));
    }

    #[test]
    fn listing_serializes_in_column_order() {
        let db = Database::new().unwrap();
        db.load_table(
            "caudal_medio_de_aguas_corrientes",
            "mes,aguas_corrientes,estaciones_fluviometricas,value\n\
             2021-01,Rio Maipo,Rio Maipo en El Manzano,152.3\n",
        )
        .unwrap();

        let rows = db.list_view(view(Module::Agua, "hidrologia/caudal")).unwrap();
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"mes":"2021-01","estaciones_fluviometricas":"Rio Maipo en El Manzano","#,
                r#""aguas_corrientes":"Rio Maipo","value":152.3}]"#
            )
        );
    }
}
