//! CallBox demonstration client.
//!
//! Drives every RPC of the calculator and greeting services through the SDK
//! clients, one demonstration per call shape.

mod calculator;
mod greeter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// CallBox demonstration client
#[derive(Parser)]
#[command(name = "callbox-client")]
#[command(about = "CallBox demonstration client - drives every gRPC call shape")]
#[command(version)]
struct Cli {
    /// gRPC endpoint of the callbox server
    #[arg(short, long, default_value = "http://127.0.0.1:50051")]
    endpoint: String,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the calculator service demonstrations
    Calculator,
    /// Drive the greeting service demonstrations
    Greeter,
    /// Drive both services
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::All) {
        Commands::Calculator => calculator::run(&cli.endpoint).await,
        Commands::Greeter => greeter::run(&cli.endpoint).await,
        Commands::All => {
            calculator::run(&cli.endpoint).await?;
            greeter::run(&cli.endpoint).await
        }
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 | 1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
