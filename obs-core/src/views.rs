//! Whole-table listings served under `/aire` and `/agua`.
//!
//! Each view is one catalog [`Source`] exposed at a fixed path. Its columns
//! are derived from the catalog: period, station, any descriptive label
//! columns, then every value column the catalog declares for the source.

use crate::catalog::{
    ParameterSource, Source, AGUA_CAIDA, CAUDAL, COLIFORMES_ACUOSA, COLIFORMES_BIOLOGICA, EMBALSE,
    EVAPORACION, METALES_ACUOSA, METALES_DISUELTOS, METALES_SEDIMENTARIA, METALES_TOTALES, NIEVE,
    POZO, SERIES_KINDS, V_CO_ANUAL, V_CO_MENSUAL, V_GLACIARES, V_HUMEDAD_RADIACION_UV,
    V_MAR_MENSUAL, V_MP10_ANUAL, V_MP10_MENSUAL, V_MP25_ANUAL, V_MP25_MENSUAL, V_NO2_ANUAL,
    V_NO2_MENSUAL, V_NOX_ANUAL, V_NOX_MENSUAL, V_NO_ANUAL, V_NO_MENSUAL, V_O3_ANUAL,
    V_O3_MENSUAL, V_OLAS_DE_CALOR, V_SO2_ANUAL, V_SO2_MENSUAL, V_TEMPERATURA,
};
use std::fmt;

/// Top-level grouping of the listing routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Aire,
    Agua,
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Module::Aire => write!(f, "aire"),
            Module::Agua => write!(f, "agua"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct View {
    pub module: Module,
    /// Route below the module, e.g. `mp25/anual`
    pub path: &'static str,
    pub source: &'static Source,
    /// Descriptive text columns listed between the station and the values
    pub labels: &'static [&'static str],
}

static PARAMETER_SOURCES: [&ParameterSource; 2] = [&METALES_SEDIMENTARIA, &METALES_ACUOSA];

impl View {
    /// Output columns in order.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec![self.source.period_column, self.source.station_column];
        columns.extend_from_slice(self.labels);
        for kind in SERIES_KINDS {
            if std::ptr::eq(kind.source, self.source) && !columns.contains(&kind.column) {
                columns.push(kind.column);
            }
        }
        for param in PARAMETER_SOURCES.iter() {
            if std::ptr::eq(param.source, self.source) {
                columns.push(param.value_column);
            }
        }
        columns
    }

    /// Route relative to the API prefix, e.g. `/aire/mp25/anual`.
    pub fn route(&self) -> String {
        format!("/{}/{}", self.module, self.path)
    }

    pub fn find(module: Module, path: &str) -> Option<&'static View> {
        VIEWS.iter().find(|v| v.module == module && v.path == path)
    }
}

const fn aire(path: &'static str, source: &'static Source) -> View {
    View {
        module: Module::Aire,
        path,
        source,
        labels: &[],
    }
}

const fn agua(
    path: &'static str,
    source: &'static Source,
    labels: &'static [&'static str],
) -> View {
    View {
        module: Module::Agua,
        path,
        source,
        labels,
    }
}

pub static VIEWS: &[View] = &[
    aire("climaticos/temperatura", &V_TEMPERATURA),
    aire("climaticos/humedad-radiacion-uv", &V_HUMEDAD_RADIACION_UV),
    aire("mp25/anual", &V_MP25_ANUAL),
    aire("mp25/mensual", &V_MP25_MENSUAL),
    aire("mp10/anual", &V_MP10_ANUAL),
    aire("mp10/mensual", &V_MP10_MENSUAL),
    aire("o3/anual", &V_O3_ANUAL),
    aire("o3/mensual", &V_O3_MENSUAL),
    aire("so2/anual", &V_SO2_ANUAL),
    aire("so2/mensual", &V_SO2_MENSUAL),
    aire("no2/anual", &V_NO2_ANUAL),
    aire("no2/mensual", &V_NO2_MENSUAL),
    aire("co/anual", &V_CO_ANUAL),
    aire("co/mensual", &V_CO_MENSUAL),
    aire("no/anual", &V_NO_ANUAL),
    aire("no/mensual", &V_NO_MENSUAL),
    aire("nox/anual", &V_NOX_ANUAL),
    aire("nox/mensual", &V_NOX_MENSUAL),
    aire("eventos/olas-calor", &V_OLAS_DE_CALOR),
    agua("vistas/mar-mensual", &V_MAR_MENSUAL, &[]),
    agua("vistas/glaciares-anual-cuenca", &V_GLACIARES, &[]),
    agua("contaminantes/coliformes-biologica", &COLIFORMES_BIOLOGICA, &[]),
    agua("contaminantes/coliformes-acuosa", &COLIFORMES_ACUOSA, &[]),
    agua("contaminantes/metales-sedimentaria", &METALES_TOTALES, &["parametros_poal"]),
    agua("contaminantes/metales-acuosa", &METALES_DISUELTOS, &["parametros_poal"]),
    agua("hidrologia/caudal", &CAUDAL, &["aguas_corrientes"]),
    agua("hidrologia/pozos", &POZO, &[]),
    agua("meteorologicos/lluvia", &AGUA_CAIDA, &[]),
    agua("meteorologicos/evaporacion", &EVAPORACION, &[]),
    agua("meteorologicos/nieve", &NIEVE, &[]),
    agua("almacenamiento/embalses", &EMBALSE, &[]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_sources;
    use std::collections::HashSet;

    #[test]
    fn routes_are_unique() {
        let routes: HashSet<String> = VIEWS.iter().map(View::route).collect();
        assert_eq!(routes.len(), VIEWS.len());
    }

    #[test]
    fn every_catalog_source_has_a_view() {
        for source in all_sources() {
            assert!(
                VIEWS.iter().any(|v| std::ptr::eq(v.source, source)),
                "no view for '{}'",
                source.table
            );
        }
    }

    #[test]
    fn columns_come_from_the_catalog() {
        let mp25 = View::find(Module::Aire, "mp25/anual").unwrap();
        assert_eq!(
            mp25.columns(),
            vec![
                "anio",
                "estacion",
                "mp25_max_hor_anual",
                "mp25_min_hor_anual",
                "mp25_perc50",
                "mp25_perc90",
                "mp25_perc95",
                "mp25_perc98",
            ]
        );

        let caudal = View::find(Module::Agua, "hidrologia/caudal").unwrap();
        assert_eq!(
            caudal.columns(),
            vec!["mes", "estaciones_fluviometricas", "aguas_corrientes", "value"]
        );

        let metales = View::find(Module::Agua, "contaminantes/metales-acuosa").unwrap();
        assert_eq!(
            metales.columns(),
            vec!["dia", "estaciones_poal", "parametros_poal", "value"]
        );
    }

    #[test]
    fn route_includes_module() {
        let view = View::find(Module::Agua, "almacenamiento/embalses").unwrap();
        assert_eq!(view.route(), "/agua/almacenamiento/embalses");
        assert!(View::find(Module::Aire, "almacenamiento/embalses").is_none());
    }
}
