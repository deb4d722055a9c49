//! Root, health and info routes.

use super::blocking;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: String,
    pub docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// `connected` or `disconnected`
    pub database: &'static str,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct Contact {
    pub email: String,
    pub documentation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub api_name: String,
    pub version: String,
    pub description: String,
    pub modules: Vec<&'static str>,
    pub data_sources: Vec<&'static str>,
    pub contact: Contact,
}

pub async fn root(State(st): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Observatorio Ambiental API",
        version: st.config.api_version.clone(),
        docs: "/api/public/info",
    })
}

/// Always answers 200; an unreachable store is reported in the body.
pub async fn health(State(st): State<AppState>) -> Json<HealthResponse> {
    let database = match blocking(&st, |db| db.ping()).await {
        Ok(()) => "connected",
        Err(e) => {
            log::warn!("health: database unreachable: {}", e);
            "disconnected"
        }
    };
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        database,
        version: st.config.api_version.clone(),
    })
}

pub async fn info(State(st): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        api_name: st.config.api_name.clone(),
        version: st.config.api_version.clone(),
        description: st.config.api_description.clone(),
        modules: vec!["agua", "aire"],
        data_sources: vec![
            "Dirección General de Aguas (DGA)",
            "Sistema de Información Nacional de Calidad del Aire (SINCA)",
        ],
        contact: Contact {
            email: st.config.contact_email.clone(),
            documentation: "/api/public/info",
        },
    })
}
