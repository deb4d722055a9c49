pub mod entidades_agua;
pub mod estaciones;
pub mod general;
pub mod vistas;

use crate::error::AppError;
use crate::AppState;
use obs_db::Database;

/// Run a synchronous store call on tokio's blocking pool.
pub(crate) async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Database) -> obs_db::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db = state.db.clone();
    Ok(tokio::task::spawn_blocking(move || f(&db)).await??)
}
