//! Screen Simulator Web Server Binary
//!
//! This binary starts the screensim web server that serves the simulator
//! frontend and the REST API behind it.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3080, configured preset source)
//! screensim-web
//!
//! # Specify port and a preset document
//! screensim-web --port 8080 --presets devices.md
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use screensim::config::Config;
use screensim::web;

/// Screen Simulator Web Server - simulator frontend and REST API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Preset document to load at startup: a file path or an HTTP(S) URL.
    /// Overrides the configured source; the built-in list stays active
    /// when loading fails.
    #[arg(long, value_name = "PATH|URL")]
    presets: Option<String>,

    /// Viewing display density in dots per inch.
    /// Overrides the configured calibration value.
    #[arg(long, value_name = "DPI")]
    calibration_dpi: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration, then layer CLI overrides on top
    let mut config = Config::load().unwrap_or_default();
    if let Some(source) = args.presets {
        config.presets.source = Some(source);
    }
    if let Some(dpi) = args.calibration_dpi {
        config.display.calibration_dpi = dpi;
    }
    config.validate()?;

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
