//! `/estaciones` routes: station listings and the metric discovery flow.

use super::blocking;
use crate::error::AppError;
use crate::extract::{Path, Query};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use obs_core::Station;
use obs_db::models::{StationMetrics, StationSeries, StationSubmetrics};
use serde::Deserialize;

/// Query string shared by the discovery endpoints.
///
/// Exactly one of `estacion_id` and `nombre` identifies the station.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    pub estacion_id: Option<i64>,
    pub nombre: Option<String>,
    /// Category label, slug or alias (`/submetricas`)
    pub metrica: Option<String>,
    /// Exact sub-metric name (`/datos-submetrica`)
    pub submetrica: Option<String>,
}

pub async fn list(State(st): State<AppState>) -> Result<Json<Vec<Station>>, AppError> {
    let stations = blocking(&st, |db| db.list_stations()).await?;
    Ok(Json(stations))
}

pub async fn by_id(
    State(st): State<AppState>,
    Path(estacion_id): Path<i64>,
) -> Result<Json<Station>, AppError> {
    let station = blocking(&st, move |db| db.station(estacion_id)).await?;
    Ok(Json(station))
}

pub async fn by_name(
    State(st): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Station>, AppError> {
    let station = blocking(&st, move |db| db.station_named(&nombre)).await?;
    Ok(Json(station))
}

pub async fn metricas(
    State(st): State<AppState>,
    Query(q): Query<StationQuery>,
) -> Result<Json<StationMetrics>, AppError> {
    let metrics = blocking(&st, move |db| {
        db.station_metrics(q.estacion_id, q.nombre.as_deref())
    })
    .await?;
    Ok(Json(metrics))
}

pub async fn submetricas(
    State(st): State<AppState>,
    Query(q): Query<StationQuery>,
) -> Result<Json<StationSubmetrics>, AppError> {
    let sub = blocking(&st, move |db| {
        db.station_submetrics(q.estacion_id, q.nombre.as_deref(), q.metrica.as_deref())
    })
    .await?;
    Ok(Json(sub))
}

pub async fn datos_submetrica(
    State(st): State<AppState>,
    Query(q): Query<StationQuery>,
) -> Result<Json<StationSeries>, AppError> {
    let series = blocking(&st, move |db| {
        db.station_series(q.estacion_id, q.nombre.as_deref(), q.submetrica.as_deref())
    })
    .await?;
    Ok(Json(series))
}
