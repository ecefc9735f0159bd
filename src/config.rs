use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "framecheck.toml";

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "FRAMECHECK_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub framecheck: FramecheckConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FramecheckConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FramecheckConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Treat unreadable or malformed frame files as a failure.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_show_class")]
    pub show_class: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            strict: false,
            show_class: default_show_class(),
        }
    }
}

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_show_class() -> bool {
    true
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. `explicit` (e.g. from `--config`)
    /// 2. Path specified in FRAMECHECK_CONFIG environment variable
    /// 3. ./framecheck.toml in current directory
    ///
    /// An explicitly named file must exist. A missing default file yields
    /// the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let config_path = match named {
            Some(path) => path,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        Self::from_file(&config_path)
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let level = self.framecheck.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "framecheck.log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.framecheck.log_level
            );
        }

        Ok(())
    }

    /// Get the configured log filter
    pub fn log_level(&self) -> &str {
        &self.framecheck.log_level
    }
}
