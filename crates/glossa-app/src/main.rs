use std::path::PathBuf;

use clap::Parser;
use glossa_config::Config;
use glossa_core::store::Store;

pub mod menu;
pub mod profile;

/// Console dictionary lookup and editing tool
#[derive(Parser)]
#[command(name = "glossa", version, about)]
struct Cli {
    /// Dictionary file to load on startup
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// JSON config profile; defaults to env-derived settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => profile::load_profile(path)?,
        None => Config::new(),
    };

    let mut store = Store::new();
    if let Some(path) = &cli.file {
        match store.load(path) {
            Ok(summary) => tracing::info!(loaded = summary.loaded, "preloaded dictionary"),
            Err(e) => tracing::warn!("failed to preload {}: {e}", path.display()),
        }
    }

    menu::run(&mut store, &config)
}

/// Pretty logs on a terminal, JSON when piped. Keeps stdout clean for the
/// menu by logging to stderr.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
