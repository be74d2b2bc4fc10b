use party_menu_rs::constants::{DEFAULT_HOST, DEFAULT_PORT};
use party_menu_rs::shared_main::{logger_init, serve, AppState};

use anyhow::Context;
use clap::Parser;
use log::log_enabled;
use tokio::net::TcpListener;

/// Backend for browsing the party dish catalog and planning a menu.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address to bind to
    #[arg(long, env, default_value = DEFAULT_HOST)]
    host: String,
    /// Port to listen on
    #[arg(short, long, env, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Backing store connection string{n}Only logged at startup, selections live in memory
    #[arg(long, env = "MONGO_URL")]
    mongo_url: Option<String>,
    /// Backing store database name
    #[arg(long, env = "DB_NAME")]
    db_name: Option<String>,
    /// Enable verbose logging (filter results, timings){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //// Args setup
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());
    log::info!("Starting party menu API...");

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for per-request details");
    }

    match (&args.mongo_url, &args.db_name) {
        (Some(_), Some(db_name)) => {
            log::info!("Backing store configured (db: {}), not used for selections", db_name)
        }
        _ => log::info!("No backing store configured, running fully in memory"),
    }

    let state = AppState::new();

    let address = format!("{}:{}", args.host, args.port);
    log::info!("Binding to {}", address);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    serve(listener, state).await
}
