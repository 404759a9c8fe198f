//! CallBox server binary.
//!
//! Hosts the calculator and greeting gRPC services on a single tonic server
//! bound to one TCP endpoint, with layered configuration and signal-driven
//! graceful shutdown.

mod config;
mod logging;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use callbox_calculator::CalculatorServiceImpl;
use callbox_calculator_sdk::CalculatorServiceServer;
use callbox_greeter::GreetServiceImpl;
use callbox_greeter::domain::GreeterSettings;
use callbox_greeter_sdk::GreetServiceServer;

use crate::config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// CallBox server - gRPC call-shape demonstration services
#[derive(Parser)]
#[command(name = "callbox-server")]
#[command(about = "CallBox server - gRPC call-shape demonstration services")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for the gRPC endpoint (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config: defaults -> YAML (if provided) -> env (CALLBOX__*) -> CLI
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    logging::init_logging(&config.logging, cli.verbose);
    tracing::info!("CallBox server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    // load_or_default already validated the layered sources
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    // Root cancellation token; the signal task cancels it to drive shutdown.
    let cancel = CancellationToken::new();
    let cancel_for_signals = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::warn!(error = %e, "signal waiter failed, falling back to ctrl_c");
            let _ = tokio::signal::ctrl_c().await;
        }
        cancel_for_signals.cancel();
    });

    let calculator = CalculatorServiceImpl::new(Arc::new(
        callbox_calculator::domain::Service::new(),
    ));

    let greeter_settings = GreeterSettings {
        pace: Duration::from_millis(config.greeter.pace_ms),
        work_increment: Duration::from_millis(config.greeter.work_increment_ms),
    };
    let greeter = GreetServiceImpl::new(Arc::new(callbox_greeter::domain::Service::new(
        greeter_settings,
    )));

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, transport = "tcp", "callbox gRPC server listening");

    Server::builder()
        .add_service(CalculatorServiceServer::new(calculator))
        .add_service(GreetServiceServer::new(greeter))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
            cancel.cancelled().await;
            tracing::info!("callbox server shutting down");
        })
        .await?;

    Ok(())
}
