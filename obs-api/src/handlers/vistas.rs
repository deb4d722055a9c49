//! `/aire` and `/agua` routes: one whole-table listing per catalog view.

use super::blocking;
use crate::error::AppError;
use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use obs_core::views::{View, VIEWS};
use obs_db::models::ViewRow;

async fn list(st: AppState, view: &'static View) -> Result<Json<Vec<ViewRow>>, AppError> {
    let rows = blocking(&st, move |db| db.list_view(view)).await?;
    Ok(Json(rows))
}

/// A `GET` route for every view, at `/{module}/{path}`.
pub fn routes() -> Router<AppState> {
    VIEWS.iter().fold(Router::new(), |router, view| {
        router.route(&view.route(), get(move |State(st): State<AppState>| list(st, view)))
    })
}
