pub mod config;

use std::path::PathBuf;

/// Get or create the config directory (~/.config/complexity-chart/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("complexity-chart");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
