//! HTTP server startup.

use log::info;
use obs_api::config::ApiConfig;
use obs_api::{router, AppState};
use obs_db::{Database, PoolConfig};
use std::time::Duration;

pub fn pool_config(size: usize, max_overflow: usize, timeout_secs: u64) -> PoolConfig {
    PoolConfig {
        size: size.max(1),
        max_overflow,
        timeout: Duration::from_secs(timeout_secs),
    }
}

/// Open the database and serve the API until the listener fails or ctrl-c.
pub async fn run_serve(
    bind: &str,
    database: &str,
    pool: PoolConfig,
    allowed_origins: &str,
) -> anyhow::Result<()> {
    let db = tokio::task::spawn_blocking({
        let database = database.to_string();
        move || Database::open(database, pool)
    })
    .await??;
    let status = db.pool_status();
    info!(
        "database ready: {} connections open (capacity {})",
        status.open,
        pool.capacity()
    );

    let config = ApiConfig::default().with_origins(allowed_origins);
    info!(
        "{} v{} allowing origins {:?}",
        config.api_name, config.api_version, config.allowed_origins
    );
    let app = router(AppState::new(db, config));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", listener.local_addr()?);
    let serve = axum::serve(listener, app);
    tokio::select! {
        r = serve => { r?; }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown requested");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_config_from_flags() {
        let config = pool_config(4, 8, 2);
        assert_eq!(config.size, 4);
        assert_eq!(config.capacity(), 12);
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn pool_keeps_at_least_one_connection() {
        assert_eq!(pool_config(0, 0, 5).size, 1);
    }
}
