use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::{Repositories, Settings, database};
use migration::{Migrator, MigratorTrait};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and <RUN_MODE>.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API Port, overrides server.port
    #[arg(long)]
    port: Option<u16>,

    /// Serve from process memory instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut settings = Settings::load(&args.config_dir).context("Failed to load settings")?;
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = ?settings.environment, "🌱 Sustainability Metrics API Starting...");

    let repositories = if args.in_memory {
        info!("Using in-memory repositories");
        Repositories::in_memory()
    } else {
        info!("Connecting to database...");
        let db = database::connect(&settings.database)
            .await
            .context("Failed to connect to database")?;

        if settings.database.run_migrations {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("✅ Migrations applied successfully");
        }
        Repositories::postgres(db)
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = setup_app_state(&repositories, settings);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🚀 API Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
