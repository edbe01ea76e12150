use serde::Deserialize;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_policy_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_layout_file")]
    pub default_file: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

// Default values
fn default_policy_path() -> String { "q_values.npy".to_string() }
fn default_layout_file() -> String { "layouts/default.txt".to_string() }
fn default_log_filter() -> String { "exitmatrix=info".to_string() }
fn default_cell_size() -> f32 { 36.0 }
fn default_window_title() -> String { "ExitMatrix - Evacuation Route Viewer".to_string() }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            path: default_policy_path(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_file: default_layout_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyConfig::default(),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

/// Where a leniently loaded configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(String),
    Missing(String),
    Invalid { path: String, reason: String },
}

impl ConfigSource {
    /// Report the source; call once logging is initialised
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded configuration from {}", path),
            ConfigSource::Missing(path) => info!("No {} found, using default configuration", path),
            ConfigSource::Invalid { path, reason } => {
                warn!("Failed to load {}: {}; using default configuration", path, reason)
            }
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory, or use defaults if it
    /// is missing or unparseable. Nothing is logged; see [`ConfigSource::log`].
    pub fn locate() -> (Self, ConfigSource) {
        Self::locate_at(DEFAULT_CONFIG_PATH)
    }

    pub fn locate_at(path: impl AsRef<Path>) -> (Self, ConfigSource) {
        let path = path.as_ref();
        let shown = path.display().to_string();
        if !path.exists() {
            return (Config::default(), ConfigSource::Missing(shown));
        }
        match Config::load_from(path) {
            Ok(config) => (config, ConfigSource::File(shown)),
            Err(e) => (
                Config::default(),
                ConfigSource::Invalid {
                    path: shown,
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Load configuration from `path`, failing on read or parse errors
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents)?)
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `filter`.
pub fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
