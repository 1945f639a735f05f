//! stockroom entry point
//!
//! Loads environment configuration, opens the store, and serves the admin
//! API. An unreachable store fails here, before any routing exists.

use tracing_subscriber::EnvFilter;

use stockroom::config::ServerConfig;
use stockroom::http_server::HttpServer;
use stockroom::store;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let pool = store::connect(&config.database_url).await?;

    HttpServer::new(config, pool).start().await?;
    Ok(())
}
