//! Parley chat proxy server binary.
//!
//! Serves `POST /api/chat`, forwarding each prompt to the completion API.
//! Settings come from flags, the environment, or a `.env` file.

use clap::Parser;
use parley_api::AppState;
use parley_api::config::{ApiConfig, DEFAULT_PORT};
use parley_core::ApiKey;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments for the proxy server.
#[derive(Parser, Debug)]
#[command(name = "parley_server", version, about = "Parley chat proxy server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// API key for the upstream completion service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: ApiKey,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,parley_api=debug,parley_core=debug")),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig::new(&args.host, args.port, args.openai_api_key);
    let app = parley_api::router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        addr = %local_addr,
        version = parley_core::version(),
        "Server is running on port {}",
        local_addr.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // An error here means no signal handler could be installed; run until killed.
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    } else {
        std::future::pending::<()>().await;
    }
}
