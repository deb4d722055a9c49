//! Observatorio CLI - serve, seed and inspect Chilean environmental data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "obs-cli",
    version,
    about = "Chilean environmental monitoring data API"
)]
struct Cli {
    #[command(subcommand)]
    command: obs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    obs_cmd::run(cli.command).await
}
