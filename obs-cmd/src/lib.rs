//! Command implementations for the observatory CLI.
//!
//! Provides subcommands to serve the HTTP API, seed a SQLite file from
//! CSV fixtures and print the static metric catalog.

use clap::Subcommand;

pub mod catalog;
pub mod seed;
pub mod serve;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "OBS_BIND", default_value = "0.0.0.0:8000")]
        bind: String,

        /// Path to the SQLite database file
        #[arg(short, long, env = "DATABASE_URL", default_value = "observatorio.db")]
        database: String,

        /// Connections kept open in the pool
        #[arg(long, env = "OBS_POOL_SIZE", default_value_t = 10)]
        pool_size: usize,

        /// Extra connections allowed under load
        #[arg(long, env = "OBS_MAX_OVERFLOW", default_value_t = 20)]
        max_overflow: usize,

        /// Seconds to wait for a free connection
        #[arg(long, env = "OBS_POOL_TIMEOUT", default_value_t = 5)]
        pool_timeout_secs: u64,

        /// Comma-separated CORS origins, `*` for any
        #[arg(long, env = "OBS_ALLOWED_ORIGINS", default_value = "*")]
        allowed_origins: String,
    },

    /// Load every `<table>.csv` found in a directory into the database
    Seed {
        /// Path to the SQLite database file (created if missing)
        #[arg(short, long, env = "DATABASE_URL", default_value = "observatorio.db")]
        database: String,

        /// Directory holding one CSV per table
        #[arg(short, long, default_value = "fixtures")]
        fixtures: String,
    },

    /// Print categories and sub-metrics of the static catalog
    Catalog {
        /// Only this network (`estaciones` or `entidades-agua`)
        #[arg(short, long)]
        network: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            bind,
            database,
            pool_size,
            max_overflow,
            pool_timeout_secs,
            allowed_origins,
        } => {
            let pool = serve::pool_config(pool_size, max_overflow, pool_timeout_secs);
            serve::run_serve(&bind, &database, pool, &allowed_origins).await
        }
        Command::Seed { database, fixtures } => seed::run_seed(&database, &fixtures),
        Command::Catalog { network } => catalog::run_catalog(network.as_deref()),
    }
}
