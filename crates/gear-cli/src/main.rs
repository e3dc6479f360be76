//! GEAR license CLI entrypoint.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod handlers;

#[cfg(test)]
mod client_tests;

use commands::Commands;

#[derive(Parser)]
#[command(name = "gear")]
#[command(author, version, about = "GEAR license key service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let valid = match cli.command {
        Commands::Serve { bind } => {
            handlers::serve(bind).await?;
            true
        }
        Commands::Issue { plan, remote } => {
            handlers::issue(plan, remote.as_deref()).await?;
            true
        }
        Commands::Verify { key, remote, json } => {
            handlers::verify(&key, remote.as_deref(), json).await?
        }
        Commands::Inspect { key } => {
            handlers::inspect(&key)?;
            true
        }
    };

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
