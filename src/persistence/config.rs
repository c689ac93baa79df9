use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::complexity::ComplexityClass;
use crate::error::{ChartError, ChartResult};
use crate::plot::types::{PlotOptions, DEFAULT_HEIGHT, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH, MAX_DIMENSION};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output image width in pixels.
    pub plot_width: u32,
    /// Output image height in pixels.
    pub plot_height: u32,
    /// Curve thickness in pixels.
    pub stroke_width: u32,
    /// Labels drawn when none are given on the command line.
    pub default_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plot_width: DEFAULT_WIDTH,
            plot_height: DEFAULT_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            default_labels: ComplexityClass::ALL.iter().map(|c| c.label().to_string()).collect(),
        }
    }
}

impl Config {
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            width: self.plot_width,
            height: self.plot_height,
            stroke_width: self.stroke_width,
        }
    }

    /// Reject sizes the renderer cannot draw.
    pub fn validate(&self) -> ChartResult<()> {
        let in_bounds = |d: u32| (1..=MAX_DIMENSION).contains(&d);
        if !in_bounds(self.plot_width) || !in_bounds(self.plot_height) {
            return Err(ChartError::config(format!(
                "plot size must be within 1..={} per side, got {}x{}",
                MAX_DIMENSION, self.plot_width, self.plot_height
            )));
        }
        if self.stroke_width == 0 {
            return Err(ChartError::config("stroke_width must be non-zero"));
        }
        Ok(())
    }
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(super::config_dir()?.join("config.toml"))
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> ChartResult<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| ChartError::config(format!("parse error: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load config from disk, returning defaults if the file doesn't exist or is invalid.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Load config from `path`. A missing file is created with defaults.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid config");
                Config::default()
            }
        },
        Err(_) => {
            // Create default config file on first run
            let config = Config::default();
            if let Err(err) = write_default_config(path, &config) {
                tracing::debug!(path = %path.display(), %err, "could not write default config");
            }
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &Path, config: &Config) -> ChartResult<()> {
    let labels = toml::Value::Array(
        config
            .default_labels
            .iter()
            .map(|l| toml::Value::String(l.clone()))
            .collect(),
    );
    let content = format!(
        "# complexity-chart configuration\n\
         \n\
         # Output image size in pixels\n\
         plot_width = {}\n\
         plot_height = {}\n\
         \n\
         # Curve thickness in pixels\n\
         stroke_width = {}\n\
         \n\
         # Labels drawn when none are given on the command line\n\
         default_labels = {}\n",
        config.plot_width, config.plot_height, config.stroke_width, labels,
    );
    std::fs::write(path, content.as_bytes())
        .map_err(|e| ChartError::io(format!("write error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("plot_width = 640\n").unwrap();
        assert_eq!(config.plot_width, 640);
        assert_eq!(config.plot_height, DEFAULT_HEIGHT);
        assert_eq!(config.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.default_labels.len(), 7);
    }

    #[test]
    fn test_default_labels_override() {
        let config = parse_config("default_labels = [\"O(n!)\", \"O(1)\"]\n").unwrap();
        assert_eq!(config.default_labels, vec!["O(n!)", "O(1)"]);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = parse_config("plot_height = 0\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
        let err = parse_config("stroke_width = 0\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_oversized_rejected() {
        let err = parse_config(&format!("plot_width = {}\n", MAX_DIMENSION + 1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
        assert!(parse_config(&format!("plot_height = {}\n", MAX_DIMENSION)).is_ok());
    }

    #[test]
    fn test_malformed_rejected() {
        let err = parse_config("plot_width = \"wide\"\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_plot_options() {
        let config = Config {
            plot_width: 100,
            plot_height: 50,
            stroke_width: 2,
            ..Config::default()
        };
        assert_eq!(
            config.plot_options(),
            PlotOptions {
                width: 100,
                height: 50,
                stroke_width: 2
            }
        );
    }

    #[test]
    fn test_first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = load_config_from(&path);
        assert_eq!(config, Config::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# complexity-chart configuration"));
        assert_eq!(parse_config(&written).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "plot_width = [").unwrap();
        assert_eq!(load_config_from(&path), Config::default());
    }
}
