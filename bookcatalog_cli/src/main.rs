use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bookcatalog_cli::app_config::AppConfig;
use bookcatalog_cli::menu;
use bookcatalog_store::catalog_store::InMemoryCatalogStore;

#[derive(Debug, Parser)]
#[command(name = "bookcatalog")]
#[command(about = "Interactive catalog manager for a small library")]
struct CliArgs {
    /// Config file layered over bookcatalog.toml and the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // Logs go to stderr so they never interleave with menu output.
    let default_filter = if verbose {
        "bookcatalog_store=debug,bookcatalog_cli=debug,info"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = AppConfig::load(args.config.as_deref())?;
    tracing::info!("Opening catalog '{}'", config.catalog_name);

    let mut store = InMemoryCatalogStore::new(&config.catalog_name);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    menu::run_session(&mut store, &config, &mut lines)
}
