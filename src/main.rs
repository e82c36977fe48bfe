use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use product_catalog::app::AppState;
use product_catalog::create_app;
use product_catalog::infrastructure::{
    config::{Config, Overrides},
    logger::Logger,
};

#[derive(Debug, Parser)]
#[command(name = "product_catalog", version, about = "Product catalog REST API and web UI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "PRODUCT_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides `database.url`
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Overrides `http.port`
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    config.apply(Overrides {
        database_url: cli.database_url,
        port: cli.port,
    });
    config.validate()?;

    Logger::init(&config.logging).context("failed to initialize logging")?;
    info!("Starting product catalog server...");

    let state = AppState::from_config(&config).await?;
    let app = create_app(state, Duration::from_secs(config.http.timeout_seconds));

    let listener = TcpListener::bind(config.http.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /health                 - Health check");
    info!("   GET    /api/products           - List products");
    info!("   POST   /api/products           - Create product");
    info!("   GET    /api/products/:id       - Get product by ID");
    info!("   PUT    /api/products/:id       - Update product");
    info!("   DELETE /api/products/:id       - Delete product");
    info!("   GET    /products               - Web UI");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}
