//! Drakkar Kernel
//!
//! Serves node projections over HTTP, or prints one from the command line.

use std::net::SocketAddr;

use anyhow::{Context, Result, bail};
use axum::http::{HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use drakkar_kernel::{AppState, Config, NodeView, routes};

#[derive(Parser)]
#[command(name = "drakkar", version, about = "Content projection service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Print the projection of one node as JSON.
    Project {
        /// Node id.
        id: u64,
        /// Envelope to wrap the projection in.
        #[arg(long, value_enum, default_value = "node")]
        view: NodeView,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Project { id, view } => project(&config, id, view),
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Drakkar kernel");
    info!(port = config.port, "Configuration loaded");

    let state = AppState::new(&config).context("failed to initialize application state")?;

    let cors = build_cors_layer(&config);
    let app = routes::app(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn project(config: &Config, id: u64, view: NodeView) -> Result<()> {
    let state = AppState::new(config).context("failed to initialize application state")?;

    let Some(node) = state.store().load_node(id) else {
        bail!("{view} node with provided ID is not found.");
    };

    let body = view.render(&state.projector(), &node);
    let json = serde_json::to_string_pretty(&body).context("failed to serialize projection")?;
    println!("{json}");

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

/// Logs go to stderr so `project` output stays pipeable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
