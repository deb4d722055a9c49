//! HTTP surface of the environmental observatory.
//!
//! Public routes (`/api/public`) report health and service info; private
//! routes (`/api/private`) expose stations, water entities and their
//! measurement series, plus whole-table listings under `/aire` and `/agua`.

pub mod config;
pub mod error;
mod extract;
mod handlers;
pub mod middleware;

use axum::routing::get;
use axum::Router;
use config::ApiConfig;
use handlers::{entidades_agua, estaciones, general, vistas};
use obs_db::Database;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(db: Database, config: ApiConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(general::health))
        .route("/info", get(general::info))
}

fn private_routes() -> Router<AppState> {
    Router::new()
        .route("/estaciones", get(estaciones::list))
        .route("/estaciones/", get(estaciones::list))
        .route("/estaciones/metricas", get(estaciones::metricas))
        .route("/estaciones/submetricas", get(estaciones::submetricas))
        .route("/estaciones/datos-submetrica", get(estaciones::datos_submetrica))
        .route("/estaciones/nombre/{nombre}", get(estaciones::by_name))
        .route("/estaciones/{estacion_id}", get(estaciones::by_id))
        .route("/entidades-agua", get(entidades_agua::list))
        .route("/entidades-agua/", get(entidades_agua::list))
        .route("/entidades-agua/tipos", get(entidades_agua::tipos))
        .route("/entidades-agua/tipo/{tipo}", get(entidades_agua::by_tipo))
        .route("/entidades-agua/metricas/{nombre}", get(entidades_agua::metricas))
        .route("/entidades-agua/datos/{nombre}/{tipo}", get(entidades_agua::datos))
        .route(
            "/entidades-agua/submetricas/{tipo}/{nombre}",
            get(entidades_agua::submetricas),
        )
        .route(
            "/entidades-agua/datos-submetrica/{tipo}/{nombre}",
            get(entidades_agua::datos_submetrica),
        )
        .merge(vistas::routes())
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config.allowed_origins);
    Router::new()
        .route("/", get(general::root))
        .nest("/api/public", public_routes())
        .nest("/api/private", private_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}
