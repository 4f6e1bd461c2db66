use anyhow::Result;
use arxiv_relay::config::{get_config, load_config};
use arxiv_relay::server::{create_router, AppState};
use arxiv_relay::source::ArxivClient;
use arxiv_relay::utils::HttpClient;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arXiv Relay - forward topic searches to the arXiv API
#[derive(Parser, Debug)]
#[command(name = "arxiv-relay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Forward topic searches to the arXiv API and return entries as JSON", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("arxiv_relay={},tower_http={}", env_filter, env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified, otherwise from environment
    let mut config = if let Some(config_path) = &cli.config {
        info!("Using config file: {}", config_path.display());
        load_config(config_path)?
    } else {
        get_config()
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Shared upstream client, process-wide lifetime
    let http = Arc::new(HttpClient::with_timeouts(
        config.upstream.timeout_secs,
        config.upstream.connect_timeout_secs,
    ));
    let arxiv = ArxivClient::with_client(http, config.upstream.base_url.clone());
    let state = AppState::new(arxiv);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
