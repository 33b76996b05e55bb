//! Dictionary MCP Server Entry Point
//!
//! Loads configuration, initializes logging, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use dictionary_mcp_server::core::config::LoggingConfig;
use dictionary_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the STDIO transport.
    // Must run before Config::from_env, which logs.
    let logging = LoggingConfig::from_env();
    init_logging(&logging.level, logging.with_timestamps);

    let config = Config::from_env();

    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Dictionary endpoint: {}", config.dictionary.api_url);

    let server = McpServer::new(config.clone());

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are applied on top of the configured level.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
