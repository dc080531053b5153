//! OpenAlex MCP Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use openalex_mcp::{OpenAlexClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "openalex-mcp")]
#[command(about = "MCP server for the OpenAlex works API")]
#[command(version)]
struct Cli {
    /// Contact email for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_EMAIL")]
    email: Option<String>,

    /// OpenAlex API base URL
    #[arg(long, env = "OPENALEX_API_URL")]
    api_url: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Streamable HTTP
    Http,
}

// stdout is the protocol channel in stdio mode, so logs go to stderr.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting OpenAlex MCP server"
    );

    let mut config = Config::new(cli.email);
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }

    if !config.has_email() {
        tracing::warn!("No OPENALEX_EMAIL set; requests will not join the polite pool");
    }

    let client = OpenAlexClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
