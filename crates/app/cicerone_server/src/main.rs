//! Cicerone API server binary.

use clap::Parser;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "cicerone_server", about = "Cicerone travel-guide API server")]
struct Args {
    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// SQLite connection URL. Defaults to the platform data directory.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cicerone_api=debug,cicerone_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    // Configuration is resolved once, before the listener exists; a missing
    // credential aborts startup rather than failing on the first request.
    let mut config = cicerone_api::config::ApiConfig::from_env()?;
    config.bind_addr = format!("127.0.0.1:{}", args.port);
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    info!(
        database_url = %config.database_url,
        provider = %config.guide.provider,
        "starting cicerone_server"
    );

    let pool = cicerone_core::db::connect(&config.database_url).await?;

    info!("running database migrations");
    cicerone_api::migrate(&pool).await?;

    let state = cicerone_api::AppState {
        pool,
        config: config.clone(),
    };
    let app = cicerone_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
