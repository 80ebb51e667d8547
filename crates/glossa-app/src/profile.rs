use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glossa_config::Config;

/// Load a JSON config profile from disk.
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("loading config profile from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
