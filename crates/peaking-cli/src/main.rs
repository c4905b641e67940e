mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "peaking", about = "Real-time focus peaking server and tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the WebSocket focus peaking server
    Serve(commands::serve::ServeArgs),
    /// Apply focus peaking to image files
    Apply(commands::apply::ApplyArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve(args) => commands::serve::run(args, cli.verbose),
        Commands::Apply(args) => {
            init_logging(cli.verbose, "warn");
            commands::apply::run(args)
        }
        Commands::Config(args) => commands::config::run(args),
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG` wins over `default_level`.
pub(crate) fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
