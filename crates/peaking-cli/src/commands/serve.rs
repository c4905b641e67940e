use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use peaking_server::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Server config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Frames queued per client before the oldest is dropped
    #[arg(long)]
    pub queue: Option<usize>,
}

pub fn run(args: &ServeArgs, verbose: bool) -> Result<()> {
    let mut config = ServerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(queue) = args.queue {
        config.server.queue_capacity = queue;
    }

    crate::init_logging(verbose, &config.logging.level);
    crate::summary::print_server_summary(&config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let addr = config.bind_address();
    runtime
        .block_on(peaking_server::serve(config))
        .with_context(|| format!("Server on {addr} failed"))
}
