//! Static catalog of metric categories and their sub-metrics.
//!
//! Every sub-metric the API can serve is declared once in [`SERIES_KINDS`]
//! (or, for the metal categories, through a [`ParameterSource`] whose
//! sub-metrics are the distinct parameter values found in the store). The
//! record store is never inspected to discover columns; the catalog is the
//! single source of truth for table and column names, which are only ever
//! interpolated into SQL from these `&'static str`s.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;

/// The two families of monitored entities. Each category belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    /// Air quality, meteorological and oceanographic stations (`v_estaciones`)
    Estaciones,
    /// Hydrological and water quality entities (`v_entidades_agua`)
    EntidadesAgua,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Estaciones, Network::EntidadesAgua];

    /// Table holding the entities of this network.
    pub fn entity_table(self) -> &'static str {
        match self {
            Network::Estaciones => "v_estaciones",
            Network::EntidadesAgua => "v_entidades_agua",
        }
    }

    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| c.network() == self)
    }

    /// Parse a category name and require it to belong to this network.
    pub fn parse_category(self, input: &str) -> Result<Category> {
        let category = Category::parse(input)?;
        if category.network() != self {
            return Err(CatalogError::InvalidCategory(input.to_string()));
        }
        Ok(category)
    }

    /// Look up a declared sub-metric by its exact name across the network.
    pub fn find_series_kind(self, name: &str) -> Option<&'static SeriesKind> {
        SERIES_KINDS
            .iter()
            .find(|k| k.category.network() == self && k.name == name)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Estaciones => write!(f, "estaciones"),
            Network::EntidadesAgua => write!(f, "entidades-agua"),
        }
    }
}

/// Period resolution of a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
    Year,
}

/// Storage type of a value column. Integers are widened to floats on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    Float,
}

/// A table or view with one row per (station, period) and one or more
/// value columns.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    pub table: &'static str,
    /// Column holding the station or entity name
    pub station_column: &'static str,
    /// Column holding the period, stored as text or as an integer year
    pub period_column: &'static str,
    pub granularity: Granularity,
}

/// One measured variable: a value column of a source table.
#[derive(Debug, PartialEq, Eq)]
pub struct SeriesKind {
    /// User-facing sub-metric name (e.g., "Nivel Medio Del Mar")
    pub name: &'static str,
    pub category: Category,
    pub source: &'static Source,
    pub column: &'static str,
    pub value_type: ValueType,
}

/// A source whose rows are further keyed by a parameter column. Each distinct
/// parameter value observed in the store is a sub-metric.
#[derive(Debug, PartialEq, Eq)]
pub struct ParameterSource {
    pub source: &'static Source,
    pub parameter_column: &'static str,
    pub value_column: &'static str,
    pub value_type: ValueType,
}

/// Metric categories offered by the discovery endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Temperatura,
    HumedadRadiacionUv,
    OlasDeCalor,
    Contaminantes,
    EstacionOceanografica,
    Caudal,
    Lluvia,
    Evaporacion,
    Embalses,
    Nieve,
    Pozos,
    ColiformesBiologica,
    ColiformesAcuosa,
    MetalesSedimentaria,
    MetalesAcuosa,
    Glaciares,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 16] = [
        Category::Temperatura,
        Category::HumedadRadiacionUv,
        Category::OlasDeCalor,
        Category::Contaminantes,
        Category::EstacionOceanografica,
        Category::Caudal,
        Category::Lluvia,
        Category::Evaporacion,
        Category::Embalses,
        Category::Nieve,
        Category::Pozos,
        Category::ColiformesBiologica,
        Category::ColiformesAcuosa,
        Category::MetalesSedimentaria,
        Category::MetalesAcuosa,
        Category::Glaciares,
    ];

    /// Display label returned by the metric listing endpoints.
    pub fn label(self) -> &'static str {
        match self {
            Category::Temperatura => "Temperatura",
            Category::HumedadRadiacionUv => "Humedad, Radiación y UV",
            Category::OlasDeCalor => "Olas de Calor",
            Category::Contaminantes => "Contaminantes",
            Category::EstacionOceanografica => "Estación Oceanográfica",
            Category::Caudal => "Caudal",
            Category::Lluvia => "Lluvia",
            Category::Evaporacion => "Evaporación",
            Category::Embalses => "Embalses",
            Category::Nieve => "Nieve",
            Category::Pozos => "Pozos",
            Category::ColiformesBiologica => "Coliformes en Matriz Biológica",
            Category::ColiformesAcuosa => "Coliformes en Matriz Acuosa",
            Category::MetalesSedimentaria => "Metales en Matriz Sedimentaria",
            Category::MetalesAcuosa => "Metales Disueltos en Matriz Acuosa",
            Category::Glaciares => "Glaciares",
        }
    }

    /// Path-friendly identifier used as `{tipo}` by the water endpoints.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Temperatura => "temperatura",
            Category::HumedadRadiacionUv => "humedad_radiacion_uv",
            Category::OlasDeCalor => "olas_de_calor",
            Category::Contaminantes => "contaminantes",
            Category::EstacionOceanografica => "oceanografica",
            Category::Caudal => "caudal",
            Category::Lluvia => "lluvia",
            Category::Evaporacion => "evaporacion",
            Category::Embalses => "embalse",
            Category::Nieve => "nieve",
            Category::Pozos => "pozo",
            Category::ColiformesBiologica => "coliformes_biologica",
            Category::ColiformesAcuosa => "coliformes_acuosa",
            Category::MetalesSedimentaria => "metales_sedimentaria",
            Category::MetalesAcuosa => "metales_acuosa",
            Category::Glaciares => "glaciares",
        }
    }

    pub fn network(self) -> Network {
        match self {
            Category::Temperatura
            | Category::HumedadRadiacionUv
            | Category::OlasDeCalor
            | Category::Contaminantes
            | Category::EstacionOceanografica => Network::Estaciones,
            _ => Network::EntidadesAgua,
        }
    }

    /// Parameter descriptor for categories whose sub-metrics are discovered
    /// from the store. `None` for categories with a declared list.
    pub fn parameter_source(self) -> Option<&'static ParameterSource> {
        match self {
            Category::MetalesSedimentaria => Some(&METALES_SEDIMENTARIA),
            Category::MetalesAcuosa => Some(&METALES_ACUOSA),
            _ => None,
        }
    }

    /// Declared sub-metrics of this category, in presentation order.
    pub fn series_kinds(self) -> impl Iterator<Item = &'static SeriesKind> {
        SERIES_KINDS.iter().filter(move |k| k.category == self)
    }

    /// Look up a declared sub-metric of this category by exact name.
    pub fn find_series_kind(self, name: &str) -> Option<&'static SeriesKind> {
        self.series_kinds().find(|k| k.name == name)
    }

    /// Distinct source tables backing this category, in declaration order.
    pub fn sources(self) -> Vec<&'static Source> {
        if let Some(param) = self.parameter_source() {
            return vec![param.source];
        }
        let mut sources: Vec<&'static Source> = Vec::new();
        for kind in self.series_kinds() {
            if !sources.iter().any(|s| std::ptr::eq(*s, kind.source)) {
                sources.push(kind.source);
            }
        }
        sources
    }

    /// Resolve a user-supplied category name.
    ///
    /// The input is normalized (case, accents, punctuation) and compared for
    /// equality against each label, slug and alias. There is no partial or
    /// substring matching.
    pub fn parse(input: &str) -> Result<Category> {
        let wanted = normalize(input);
        if wanted.is_empty() {
            return Err(CatalogError::InvalidCategory(input.to_string()));
        }
        for category in Category::ALL {
            if normalize(category.label()) == wanted || normalize(category.slug()) == wanted {
                return Ok(category);
            }
        }
        CATEGORY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map(|(_, category)| *category)
            .ok_or_else(|| CatalogError::InvalidCategory(input.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra accepted spellings, already in normalized form.
const CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("temperaturas", Category::Temperatura),
    ("temperature", Category::Temperatura),
    ("humedad radiacion uv", Category::HumedadRadiacionUv),
    ("humedad y radiacion", Category::HumedadRadiacionUv),
    ("radiacion uv", Category::HumedadRadiacionUv),
    ("olas calor", Category::OlasDeCalor),
    ("eventos de olas de calor", Category::OlasDeCalor),
    ("heatwaves", Category::OlasDeCalor),
    ("calidad del aire", Category::Contaminantes),
    ("contaminante", Category::Contaminantes),
    ("pollutants", Category::Contaminantes),
    ("estacion oceanografica", Category::EstacionOceanografica),
    ("mar", Category::EstacionOceanografica),
    ("oceanografia", Category::EstacionOceanografica),
    ("caudales", Category::Caudal),
    ("caudal medio", Category::Caudal),
    ("precipitacion", Category::Lluvia),
    ("agua caida", Category::Lluvia),
    ("evaporacion real", Category::Evaporacion),
    ("embalses", Category::Embalses),
    ("volumen embalse", Category::Embalses),
    ("nieve equivalente", Category::Nieve),
    ("pozos", Category::Pozos),
    ("aguas subterraneas", Category::Pozos),
    ("coliformes biologica", Category::ColiformesBiologica),
    ("coliformes acuosa", Category::ColiformesAcuosa),
    ("metales totales", Category::MetalesSedimentaria),
    ("metales sedimentaria", Category::MetalesSedimentaria),
    ("metales disueltos", Category::MetalesAcuosa),
    ("metales acuosa", Category::MetalesAcuosa),
    ("glaciar", Category::Glaciares),
];

/// Lowercase, fold Spanish accents, turn any non-alphanumeric run into a
/// single space and trim.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            c => c,
        };
        if folded.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(folded);
        } else {
            pending_space = true;
        }
    }
    out
}

/// `nivel_medio_del_mar` -> `Nivel Medio Del Mar`
pub fn title_case(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ───────────────────── Sources ─────────────────────

const fn monthly(table: &'static str, station_column: &'static str) -> Source {
    Source {
        table,
        station_column,
        period_column: "mes",
        granularity: Granularity::Month,
    }
}

const fn yearly(table: &'static str, station_column: &'static str) -> Source {
    Source {
        table,
        station_column,
        period_column: "anio",
        granularity: Granularity::Year,
    }
}

const fn daily(table: &'static str, station_column: &'static str) -> Source {
    Source {
        table,
        station_column,
        period_column: "dia",
        granularity: Granularity::Day,
    }
}

pub static V_TEMPERATURA: Source = monthly("v_temperatura", "estacion");
pub static V_HUMEDAD_RADIACION_UV: Source = monthly("v_humedad_radiacion_uv", "estacion");
pub static V_OLAS_DE_CALOR: Source = monthly("v_num_eventos_de_olas_de_calor", "estacion");
pub static V_MAR_MENSUAL: Source = monthly("v_mar_mensual", "estacion");

pub static V_MP25_ANUAL: Source = yearly("v_mp25_anual", "estacion");
pub static V_MP25_MENSUAL: Source = monthly("v_mp25_mensual", "estacion");
pub static V_MP10_ANUAL: Source = yearly("v_mp10_anual", "estacion");
pub static V_MP10_MENSUAL: Source = monthly("v_mp10_mensual", "estacion");
pub static V_O3_ANUAL: Source = yearly("v_o3_anual", "estacion");
pub static V_O3_MENSUAL: Source = monthly("v_o3_mensual", "estacion");
pub static V_SO2_ANUAL: Source = yearly("v_so2_anual", "estacion");
pub static V_SO2_MENSUAL: Source = monthly("v_so2_mensual", "estacion");
pub static V_NO2_ANUAL: Source = yearly("v_no2_anual", "estacion");
pub static V_NO2_MENSUAL: Source = monthly("v_no2_mensual", "estacion");
pub static V_CO_ANUAL: Source = yearly("v_co_anual", "estacion");
pub static V_CO_MENSUAL: Source = monthly("v_co_mensual", "estacion");
pub static V_NO_ANUAL: Source = yearly("v_no_anual", "estacion");
pub static V_NO_MENSUAL: Source = monthly("v_no_mensual", "estacion");
pub static V_NOX_ANUAL: Source = yearly("v_nox_anual", "estacion");
pub static V_NOX_MENSUAL: Source = monthly("v_nox_mensual", "estacion");

pub static CAUDAL: Source =
    monthly("caudal_medio_de_aguas_corrientes", "estaciones_fluviometricas");
pub static AGUA_CAIDA: Source = monthly("cantidad_de_agua_caida", "estaciones_meteorologicas_dmc");
pub static EVAPORACION: Source = monthly("evaporacion_real_por_estacion", "estacion");
pub static EMBALSE: Source = monthly("volumen_del_embalse_por_embalse", "embalse");
pub static NIEVE: Source = daily("altura_nieve_equivalente_en_agua", "estaciones_nivometricas");
pub static POZO: Source = daily("nivel_estatico_de_aguas_subterraneas", "estaciones_pozo");
pub static COLIFORMES_BIOLOGICA: Source =
    daily("coliformes_fecales_en_matriz_biologica", "estaciones_poal");
pub static COLIFORMES_ACUOSA: Source =
    daily("coliformes_fecales_en_matriz_acuosa", "estaciones_poal");
pub static METALES_TOTALES: Source =
    daily("metales_totales_en_la_matriz_sedimentaria", "estaciones_poal");
pub static METALES_DISUELTOS: Source =
    daily("metales_disueltos_en_la_matriz_acuosa", "estaciones_poal");
pub static V_GLACIARES: Source = yearly("v_glaciares_anual_cuenca", "cuenca");

pub static METALES_SEDIMENTARIA: ParameterSource = ParameterSource {
    source: &METALES_TOTALES,
    parameter_column: "parametros_poal",
    value_column: "value",
    value_type: ValueType::Float,
};

pub static METALES_ACUOSA: ParameterSource = ParameterSource {
    source: &METALES_DISUELTOS,
    parameter_column: "parametros_poal",
    value_column: "value",
    value_type: ValueType::Float,
};

// ───────────────────── Series Kinds ─────────────────────

const fn kind(
    category: Category,
    source: &'static Source,
    column: &'static str,
    name: &'static str,
    value_type: ValueType,
) -> SeriesKind {
    SeriesKind {
        name,
        category,
        source,
        column,
        value_type,
    }
}

use Category::*;
use ValueType::{Float, Integer};

/// Every declared sub-metric. Names are the title-cased value column, or the
/// title-cased table name when the column is the generic `value`.
pub static SERIES_KINDS: &[SeriesKind] = &[
    // Temperatura
    kind(Temperatura, &V_TEMPERATURA, "temp_max_absoluta", "Temp Max Absoluta", Float),
    kind(Temperatura, &V_TEMPERATURA, "temp_min_absoluta", "Temp Min Absoluta", Float),
    kind(Temperatura, &V_TEMPERATURA, "temp_max_med", "Temp Max Med", Float),
    kind(Temperatura, &V_TEMPERATURA, "temp_min_med", "Temp Min Med", Float),
    kind(Temperatura, &V_TEMPERATURA, "temp_med", "Temp Med", Float),
    // Humedad, radiación y UV
    kind(
        HumedadRadiacionUv,
        &V_HUMEDAD_RADIACION_UV,
        "humedad_rel_med_mens",
        "Humedad Rel Med Mens",
        Float,
    ),
    kind(HumedadRadiacionUv, &V_HUMEDAD_RADIACION_UV, "rad_global_med", "Rad Global Med", Integer),
    kind(HumedadRadiacionUv, &V_HUMEDAD_RADIACION_UV, "uvb_prom", "Uvb Prom", Float),
    // Olas de calor
    kind(
        OlasDeCalor,
        &V_OLAS_DE_CALOR,
        "num_eventos_de_olas_de_calor",
        "Num Eventos De Olas De Calor",
        Integer,
    ),
    // Contaminantes: MP2.5
    kind(Contaminantes, &V_MP25_MENSUAL, "mp25_med_mens", "Mp25 Med Mens", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_max_hor_anual", "Mp25 Max Hor Anual", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_min_hor_anual", "Mp25 Min Hor Anual", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_perc50", "Mp25 Perc50", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_perc90", "Mp25 Perc90", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_perc95", "Mp25 Perc95", Float),
    kind(Contaminantes, &V_MP25_ANUAL, "mp25_perc98", "Mp25 Perc98", Integer),
    // Contaminantes: MP10
    kind(Contaminantes, &V_MP10_MENSUAL, "mp10_med_mens", "Mp10 Med Mens", Integer),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_max_hor_anual", "Mp10 Max Hor Anual", Float),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_min_hor_anual", "Mp10 Min Hor Anual", Float),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_perc50", "Mp10 Perc50", Float),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_perc90", "Mp10 Perc90", Float),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_perc95", "Mp10 Perc95", Float),
    kind(Contaminantes, &V_MP10_ANUAL, "mp10_perc98", "Mp10 Perc98", Integer),
    // Contaminantes: O3
    kind(Contaminantes, &V_O3_MENSUAL, "o3_med_mens", "O3 Med Mens", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_max_hor_anual", "O3 Max Hor Anual", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_min_hor_anual", "O3 Min Hor Anual", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_perc50", "O3 Perc50", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_perc90", "O3 Perc90", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_perc95", "O3 Perc95", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_perc98", "O3 Perc98", Float),
    kind(Contaminantes, &V_O3_ANUAL, "o3_perc99", "O3 Perc99", Float),
    // Contaminantes: SO2
    kind(Contaminantes, &V_SO2_MENSUAL, "so2_med_mens", "So2 Med Mens", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_max_hor_anual", "So2 Max Hor Anual", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_min_anual", "So2 Min Anual", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_perc50", "So2 Perc50", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_perc90", "So2 Perc90", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_perc95", "So2 Perc95", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_perc98", "So2 Perc98", Float),
    kind(Contaminantes, &V_SO2_ANUAL, "so2_perc99", "So2 Perc99", Float),
    // Contaminantes: NO2
    kind(Contaminantes, &V_NO2_MENSUAL, "no2_med_mens", "No2 Med Mens", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_max_hor_anual", "No2 Max Hor Anual", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_min_hor_anual", "No2 Min Hor Anual", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_perc50", "No2 Perc50", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_perc90", "No2 Perc90", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_perc95", "No2 Perc95", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_perc98", "No2 Perc98", Float),
    kind(Contaminantes, &V_NO2_ANUAL, "no2_perc99", "No2 Perc99", Float),
    // Contaminantes: CO
    kind(Contaminantes, &V_CO_MENSUAL, "co_med_mens", "Co Med Mens", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_max_hor_anual", "Co Max Hor Anual", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_min_hor_anual", "Co Min Hor Anual", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_perc50", "Co Perc50", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_perc90", "Co Perc90", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_perc95", "Co Perc95", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_perc98", "Co Perc98", Float),
    kind(Contaminantes, &V_CO_ANUAL, "co_perc99", "Co Perc99", Float),
    // Contaminantes: NO
    kind(Contaminantes, &V_NO_MENSUAL, "no_med_mens", "No Med Mens", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_max_hor_anual", "No Max Hor Anual", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_min_hor_anual", "No Min Hor Anual", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_perc50", "No Perc50", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_perc90", "No Perc90", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_perc95", "No Perc95", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_perc98", "No Perc98", Float),
    kind(Contaminantes, &V_NO_ANUAL, "no_perc99", "No Perc99", Float),
    // Contaminantes: NOx
    kind(Contaminantes, &V_NOX_MENSUAL, "nox_med_mens", "Nox Med Mens", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_max_hor_anual", "Nox Max Hor Anual", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_min_hor_anual", "Nox Min Hor Anual", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_perc50", "Nox Perc50", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_perc90", "Nox Perc90", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_perc95", "Nox Perc95", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_perc98", "Nox Perc98", Float),
    kind(Contaminantes, &V_NOX_ANUAL, "nox_perc99", "Nox Perc99", Float),
    // Estación oceanográfica
    kind(
        EstacionOceanografica,
        &V_MAR_MENSUAL,
        "temp_superficial_del_mar",
        "Temp Superficial Del Mar",
        Float,
    ),
    kind(
        EstacionOceanografica,
        &V_MAR_MENSUAL,
        "nivel_medio_del_mar",
        "Nivel Medio Del Mar",
        Float,
    ),
    // Water network
    kind(Caudal, &CAUDAL, "value", "Caudal Medio De Aguas Corrientes", Float),
    kind(Lluvia, &AGUA_CAIDA, "value", "Cantidad De Agua Caida", Float),
    kind(Evaporacion, &EVAPORACION, "value", "Evaporacion Real Por Estacion", Float),
    kind(Embalses, &EMBALSE, "value", "Volumen Del Embalse Por Embalse", Float),
    kind(Nieve, &NIEVE, "value", "Altura Nieve Equivalente En Agua", Integer),
    kind(Pozos, &POZO, "value", "Nivel Estatico De Aguas Subterraneas", Float),
    kind(
        ColiformesBiologica,
        &COLIFORMES_BIOLOGICA,
        "value",
        "Coliformes Fecales En Matriz Biologica",
        Integer,
    ),
    kind(
        ColiformesAcuosa,
        &COLIFORMES_ACUOSA,
        "value",
        "Coliformes Fecales En Matriz Acuosa",
        Float,
    ),
    kind(Glaciares, &V_GLACIARES, "num_glaciares_por_cuenca", "Num Glaciares Por Cuenca", Integer),
    kind(
        Glaciares,
        &V_GLACIARES,
        "superficie_de_glaciares_por_cuenca",
        "Superficie De Glaciares Por Cuenca",
        Float,
    ),
    kind(
        Glaciares,
        &V_GLACIARES,
        "volumen_de_hielo_glaciar_estimado_por_cuenca",
        "Volumen De Hielo Glaciar Estimado Por Cuenca",
        Float,
    ),
    kind(
        Glaciares,
        &V_GLACIARES,
        "volumen_de_agua_de_glaciares_estimada_por_cuenca",
        "Volumen De Agua De Glaciares Estimada Por Cuenca",
        Float,
    ),
];

/// All source tables referenced by the catalog, without duplicates.
pub fn all_sources() -> Vec<&'static Source> {
    let mut sources: Vec<&'static Source> = Vec::new();
    for category in Category::ALL {
        for source in category.sources() {
            if !sources.iter().any(|s| std::ptr::eq(*s, source)) {
                sources.push(source);
            }
        }
    }
    sources
}
