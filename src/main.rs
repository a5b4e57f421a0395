//! Rust demo API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rust_demo_app::api::{create_router, AppState};
use rust_demo_app::config::Config;
use rust_demo_app::error::AppError;
use rust_demo_app::metrics;
use rust_demo_app::utils::shutdown_signal;

/// Minimal Rust demo API.
#[derive(Parser, Debug)]
#[command(name = "rust-demo-app")]
#[command(about = "Minimal demo API showcasing CI/CD and DevOps best practices")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides the PORT environment variable).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("rust_demo_app=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("RUST DEMO API - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Environment: {}", config.environment);
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("  Production: {}", config.is_production());
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::Validation(e).into());
    }

    info!("Configuration loaded successfully");
    info!("Environment: {}", config.environment);

    // Create app state, capturing the process start instant
    let app_state = AppState::new(config.environment.clone());

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(AppError::Io)?;
    info!("HTTP server listening on {}", addr);
    info!("Interactive docs at http://{}/docs", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Io)?;

    Ok(())
}
