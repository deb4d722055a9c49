//! SQL schema for the observatory record store.
//!
//! Mirrors the views and tables the ETL publishes: entity tables
//! (`v_estaciones`, `v_entidades_agua`), monthly/annual air and sea views
//! keyed by `(mes|anio, estacion)`, and the raw water tables keyed by their
//! network-specific station column. The API only ever reads these tables;
//! the schema exists so that SQLite files and in-memory test databases share
//! one layout.

/// Every table created by [`create_schema`], entity tables first.
pub const TABLES: &[&str] = &[
    "v_estaciones",
    "v_entidades_agua",
    "v_temperatura",
    "v_humedad_radiacion_uv",
    "v_num_eventos_de_olas_de_calor",
    "v_mar_mensual",
    "v_mp25_anual",
    "v_mp25_mensual",
    "v_mp10_anual",
    "v_mp10_mensual",
    "v_o3_anual",
    "v_o3_mensual",
    "v_so2_anual",
    "v_so2_mensual",
    "v_no2_anual",
    "v_no2_mensual",
    "v_co_anual",
    "v_co_mensual",
    "v_no_anual",
    "v_no_mensual",
    "v_nox_anual",
    "v_nox_mensual",
    "v_glaciares_anual_cuenca",
    "caudal_medio_de_aguas_corrientes",
    "cantidad_de_agua_caida",
    "evaporacion_real_por_estacion",
    "volumen_del_embalse_por_embalse",
    "altura_nieve_equivalente_en_agua",
    "nivel_estatico_de_aguas_subterraneas",
    "coliformes_fecales_en_matriz_biologica",
    "coliformes_fecales_en_matriz_acuosa",
    "metales_totales_en_la_matriz_sedimentaria",
    "metales_disueltos_en_la_matriz_acuosa",
];

/// Returns the full SQL schema as a single batch string.
///
/// **Entity tables:**
/// - `v_estaciones` - Station metadata (id, name, coordinates, region)
/// - `v_entidades_agua` - Water-network entities (id, name, tipo)
///
/// **Air and sea views** (`mes` or `anio`, `estacion`, value columns):
/// temperature, humidity/radiation/UV, heatwave counts, sea level and
/// surface temperature, and monthly/annual statistics for eight pollutants.
///
/// **Water tables** (period, station column, `value`): flow, rainfall,
/// evaporation, reservoir volume, snow water equivalent, well level, fecal
/// coliforms, metals (keyed additionally by `parametros_poal`) and glaciers
/// by basin. Every series table is keyed by period and station, so
/// reloading a fixture replaces rows instead of duplicating them.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS v_estaciones (
        id INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        latitud REAL,
        longitud REAL,
        numero_region INTEGER,
        nombre_region TEXT,
        descripcion TEXT,
        created_at TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_estaciones_nombre ON v_estaciones(nombre);

    CREATE TABLE IF NOT EXISTS v_entidades_agua (
        id INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        tipo TEXT NOT NULL,
        descripcion TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_entidades_agua_nombre ON v_entidades_agua(nombre);
    CREATE INDEX IF NOT EXISTS idx_entidades_agua_tipo ON v_entidades_agua(tipo);

    CREATE TABLE IF NOT EXISTS v_temperatura (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        temp_max_absoluta REAL,
        temp_min_absoluta REAL,
        temp_max_med REAL,
        temp_min_med REAL,
        temp_med REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_humedad_radiacion_uv (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        humedad_rel_med_mens REAL,
        rad_global_med INTEGER,
        uvb_prom REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_num_eventos_de_olas_de_calor (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        num_eventos_de_olas_de_calor INTEGER,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_mar_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        temp_superficial_del_mar REAL,
        nivel_medio_del_mar REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_mp25_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        mp25_max_hor_anual REAL,
        mp25_min_hor_anual REAL,
        mp25_perc50 REAL,
        mp25_perc90 REAL,
        mp25_perc95 REAL,
        mp25_perc98 INTEGER,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_mp25_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        mp25_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_mp10_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        mp10_max_hor_anual REAL,
        mp10_min_hor_anual REAL,
        mp10_perc50 REAL,
        mp10_perc90 REAL,
        mp10_perc95 REAL,
        mp10_perc98 INTEGER,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_mp10_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        mp10_med_mens INTEGER,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_o3_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        o3_max_hor_anual REAL,
        o3_min_hor_anual REAL,
        o3_perc50 REAL,
        o3_perc90 REAL,
        o3_perc95 REAL,
        o3_perc98 REAL,
        o3_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_o3_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        o3_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_so2_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        so2_max_hor_anual REAL,
        so2_min_anual REAL,
        so2_perc50 REAL,
        so2_perc90 REAL,
        so2_perc95 REAL,
        so2_perc98 REAL,
        so2_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_so2_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        so2_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_no2_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        no2_max_hor_anual REAL,
        no2_min_hor_anual REAL,
        no2_perc50 REAL,
        no2_perc90 REAL,
        no2_perc95 REAL,
        no2_perc98 REAL,
        no2_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_no2_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        no2_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_co_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        co_max_hor_anual REAL,
        co_min_hor_anual REAL,
        co_perc50 REAL,
        co_perc90 REAL,
        co_perc95 REAL,
        co_perc98 REAL,
        co_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_co_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        co_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_no_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        no_max_hor_anual REAL,
        no_min_hor_anual REAL,
        no_perc50 REAL,
        no_perc90 REAL,
        no_perc95 REAL,
        no_perc98 REAL,
        no_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_no_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        no_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_nox_anual (
        anio INTEGER NOT NULL,
        estacion TEXT NOT NULL,
        nox_max_hor_anual REAL,
        nox_min_hor_anual REAL,
        nox_perc50 REAL,
        nox_perc90 REAL,
        nox_perc95 REAL,
        nox_perc98 REAL,
        nox_perc99 REAL,
        PRIMARY KEY (anio, estacion)
    );
    CREATE TABLE IF NOT EXISTS v_nox_mensual (
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        nox_med_mens REAL,
        PRIMARY KEY (mes, estacion)
    );

    CREATE TABLE IF NOT EXISTS v_glaciares_anual_cuenca (
        anio INTEGER NOT NULL,
        cuenca TEXT NOT NULL,
        num_glaciares_por_cuenca INTEGER,
        superficie_de_glaciares_por_cuenca REAL,
        volumen_de_hielo_glaciar_estimado_por_cuenca REAL,
        volumen_de_agua_de_glaciares_estimada_por_cuenca REAL,
        PRIMARY KEY (anio, cuenca)
    );

    CREATE TABLE IF NOT EXISTS caudal_medio_de_aguas_corrientes (
        dti_cl_mes TEXT,
        dti_cl_aguas_corrientes TEXT,
        dti_cl_estaciones_fluviometricas TEXT,
        mes TEXT NOT NULL,
        aguas_corrientes TEXT,
        estaciones_fluviometricas TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (mes, estaciones_fluviometricas)
    );
    CREATE INDEX IF NOT EXISTS idx_caudal_estacion
        ON caudal_medio_de_aguas_corrientes(estaciones_fluviometricas);

    CREATE TABLE IF NOT EXISTS cantidad_de_agua_caida (
        dti_cl_mes TEXT,
        dti_cl_estaciones_meteorologicas_dmc TEXT,
        mes TEXT NOT NULL,
        estaciones_meteorologicas_dmc TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (mes, estaciones_meteorologicas_dmc)
    );
    CREATE INDEX IF NOT EXISTS idx_agua_caida_estacion
        ON cantidad_de_agua_caida(estaciones_meteorologicas_dmc);

    CREATE TABLE IF NOT EXISTS evaporacion_real_por_estacion (
        dti_cl_mes TEXT,
        dti_cl_estacion TEXT,
        mes TEXT NOT NULL,
        estacion TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (mes, estacion)
    );
    CREATE INDEX IF NOT EXISTS idx_evaporacion_estacion
        ON evaporacion_real_por_estacion(estacion);

    CREATE TABLE IF NOT EXISTS volumen_del_embalse_por_embalse (
        dti_cl_mes TEXT,
        dti_cl_embalse TEXT,
        mes TEXT NOT NULL,
        embalse TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (mes, embalse)
    );
    CREATE INDEX IF NOT EXISTS idx_embalse_nombre
        ON volumen_del_embalse_por_embalse(embalse);

    CREATE TABLE IF NOT EXISTS altura_nieve_equivalente_en_agua (
        dti_cl_dia INTEGER,
        dti_cl_t001est_nivo TEXT,
        dia TEXT NOT NULL,
        estaciones_nivometricas TEXT NOT NULL,
        value INTEGER,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_nivometricas)
    );
    CREATE INDEX IF NOT EXISTS idx_nieve_estacion
        ON altura_nieve_equivalente_en_agua(estaciones_nivometricas);

    CREATE TABLE IF NOT EXISTS nivel_estatico_de_aguas_subterraneas (
        dti_cl_dia INTEGER,
        dti_cl_t009estacion_pozo TEXT,
        dia TEXT NOT NULL,
        estaciones_pozo TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_pozo)
    );
    CREATE INDEX IF NOT EXISTS idx_pozo_estacion
        ON nivel_estatico_de_aguas_subterraneas(estaciones_pozo);

    CREATE TABLE IF NOT EXISTS coliformes_fecales_en_matriz_biologica (
        dti_cl_dia INTEGER,
        dti_cl_t013est_poal TEXT,
        dia TEXT NOT NULL,
        estaciones_poal TEXT NOT NULL,
        value INTEGER,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_poal)
    );
    CREATE INDEX IF NOT EXISTS idx_coliformes_bio_estacion
        ON coliformes_fecales_en_matriz_biologica(estaciones_poal);

    CREATE TABLE IF NOT EXISTS coliformes_fecales_en_matriz_acuosa (
        dti_cl_dia INTEGER,
        dti_cl_t013est_poal TEXT,
        dia TEXT NOT NULL,
        estaciones_poal TEXT NOT NULL,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_poal)
    );
    CREATE INDEX IF NOT EXISTS idx_coliformes_acu_estacion
        ON coliformes_fecales_en_matriz_acuosa(estaciones_poal);

    CREATE TABLE IF NOT EXISTS metales_totales_en_la_matriz_sedimentaria (
        dti_cl_dia INTEGER,
        dti_cl_t013est_poal TEXT,
        dti_cl_t014param_poal TEXT,
        dia TEXT NOT NULL,
        estaciones_poal TEXT NOT NULL,
        parametros_poal TEXT,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_poal, parametros_poal)
    );
    CREATE INDEX IF NOT EXISTS idx_metales_sed_estacion
        ON metales_totales_en_la_matriz_sedimentaria(estaciones_poal);

    CREATE TABLE IF NOT EXISTS metales_disueltos_en_la_matriz_acuosa (
        dti_cl_dia INTEGER,
        dti_cl_t013est_poal TEXT,
        dti_cl_t014param_poal TEXT,
        dia TEXT NOT NULL,
        estaciones_poal TEXT NOT NULL,
        parametros_poal TEXT,
        value REAL,
        flag_codes TEXT,
        flags TEXT,
        PRIMARY KEY (dia, estaciones_poal, parametros_poal)
    );
    CREATE INDEX IF NOT EXISTS idx_metales_acu_estacion
        ON metales_disueltos_en_la_matriz_acuosa(estaciones_poal);
    "#
}
