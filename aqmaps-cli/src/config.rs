//! Configuration loading for the aqmaps command line

use crate::error::{AppError, Result};
use aqmaps_core::SimulationConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "aqmaps.toml";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where map data comes from.
#[derive(Clone, Debug, Deserialize)]
pub struct SourceConfig {
    /// Web server host (default: localhost)
    #[serde(default = "default_host")]
    pub host: String,

    /// Local mirror of the server's files; used instead of HTTP when set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the readings map, flight log and report
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Also render a PNG flight map
    #[serde(default)]
    pub png: bool,

    /// Width of the PNG flight map in pixels (default: 1200)
    #[serde(default = "default_png_width")]
    pub png_width: u32,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_png_width() -> u32 {
    1200
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            data_dir: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            png: false,
            png_width: default_png_width(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` if given, else `aqmaps.toml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}
