//! `/entidades-agua` routes: water entity listings and per-category data.

use super::blocking;
use crate::error::AppError;
use crate::extract::{Path, Query};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use obs_core::WaterEntity;
use obs_db::models::{DataRecord, EntitySeries, EntitySubmetrics};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SeriesQuery {
    pub submetrica: Option<String>,
}

pub async fn list(State(st): State<AppState>) -> Result<Json<Vec<WaterEntity>>, AppError> {
    let entities = blocking(&st, |db| db.list_water_entities()).await?;
    Ok(Json(entities))
}

pub async fn by_tipo(
    State(st): State<AppState>,
    Path(tipo): Path<String>,
) -> Result<Json<Vec<WaterEntity>>, AppError> {
    let entities = blocking(&st, move |db| db.entities_of_tipo(&tipo)).await?;
    Ok(Json(entities))
}

pub async fn tipos(State(st): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let tipos = blocking(&st, |db| db.water_entity_tipos()).await?;
    Ok(Json(tipos))
}

pub async fn metricas(
    State(st): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let categories = blocking(&st, move |db| db.entity_metrics(&nombre)).await?;
    Ok(Json(categories))
}

pub async fn datos(
    State(st): State<AppState>,
    Path((nombre, tipo)): Path<(String, String)>,
) -> Result<Json<Vec<DataRecord>>, AppError> {
    let rows = blocking(&st, move |db| db.entity_records(&nombre, &tipo)).await?;
    Ok(Json(rows))
}

pub async fn submetricas(
    State(st): State<AppState>,
    Path((tipo, nombre)): Path<(String, String)>,
) -> Result<Json<EntitySubmetrics>, AppError> {
    let sub = blocking(&st, move |db| db.entity_submetrics(&tipo, &nombre)).await?;
    Ok(Json(sub))
}

pub async fn datos_submetrica(
    State(st): State<AppState>,
    Path((tipo, nombre)): Path<(String, String)>,
    Query(q): Query<SeriesQuery>,
) -> Result<Json<EntitySeries>, AppError> {
    let series = blocking(&st, move |db| {
        db.entity_series(&tipo, &nombre, q.submetrica.as_deref())
    })
    .await?;
    Ok(Json(series))
}
