//! Bazi reading server.

use std::net::SocketAddr;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bazi_server::ServerConfig;

#[derive(Parser)]
#[command(name = "bazi-server", version, about = "HTTP API for Bazi readings")]
struct Args {
    /// Address to listen on (overrides BAZI_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Years in the fortune timeline (overrides BAZI_HORIZON)
    #[arg(long)]
    years: Option<u32>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    if let Some(bind) = args.bind {
        config = config.with_bind(bind);
    }
    if let Some(years) = args.years {
        config = config.with_horizon(years);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        horizon = config.reading.horizon_years,
        "bazi-server starting"
    );

    if let Err(e) = bazi_server::run(config).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
