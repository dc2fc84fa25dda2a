//! Chat gateway server binary

#![allow(missing_docs)]

use anyhow::Context;
use chat_gateway::{Config, server};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Chat gateway CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (defaults to config/gateway.yaml)
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host (overrides config file and GATEWAY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config file and GATEWAY_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())
        .await
        .context("failed to load configuration")?;

    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate().context("invalid command line overrides")?;

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.json_logs);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
