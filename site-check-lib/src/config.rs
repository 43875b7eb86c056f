//! Configuration file parsing and management.
//!
//! This module handles loading configuration from TOML files and from
//! environment variables, and merging them with proper precedence rules:
//! CLI flag > environment > config file > built-in default. The merge with
//! CLI flags happens in the CLI crate; this module supplies the lower
//! layers.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Configuration loaded from TOML files.
///
/// This represents the structure of configuration files that users can
/// create to set default values:
///
/// ```toml
/// [defaults]
/// concurrency = 64
/// timeout = 10
/// pretty = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default worker pool size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,

    /// Default per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Default pretty output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

/// Configuration values read from environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// SC_CONCURRENCY - worker pool size
    pub concurrency: Option<usize>,

    /// SC_TIMEOUT - per-request timeout in seconds
    pub timeout: Option<u64>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit warnings for config issues
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The parsed configuration or an error if reading or parsing fails.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, CheckError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CheckError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CheckError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            CheckError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Looks for configuration files in standard locations and merges them,
    /// later files overriding earlier ones:
    ///
    /// 1. `$XDG_CONFIG_HOME/site-check/config.toml` (lowest precedence)
    /// 2. `.site-check.toml` in the current directory
    ///
    /// Missing files are skipped silently; broken files produce a warning
    /// in verbose mode but never abort the run.
    pub fn discover_and_load(&self) -> Result<FileConfig, CheckError> {
        let mut merged = FileConfig::default();

        for path in self.discovery_paths() {
            if !path.exists() {
                continue;
            }
            match self.load_file(&path) {
                Ok(config) => {
                    merged = merge_configs(merged, config);
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("Warning: skipping config {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(merged)
    }

    /// Standard configuration file locations, lowest precedence first.
    fn discovery_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(xdg) = xdg_config_home() {
            paths.push(xdg.join("site-check").join("config.toml"));
        }
        paths.push(PathBuf::from(".site-check.toml"));

        paths
    }

    /// Validate a loaded configuration.
    fn validate_config(&self, config: &FileConfig) -> Result<(), CheckError> {
        if let Some(defaults) = &config.defaults {
            if let Some(concurrency) = defaults.concurrency {
                if concurrency == 0 || concurrency > 1024 {
                    return Err(CheckError::config(format!(
                        "defaults.concurrency must be 1-1024, got {}",
                        concurrency
                    )));
                }
            }
            if let Some(timeout) = defaults.timeout {
                if timeout == 0 {
                    return Err(CheckError::config("defaults.timeout must be at least 1"));
                }
            }
        }
        Ok(())
    }
}

/// Merge two configurations, values in `overlay` winning.
fn merge_configs(base: FileConfig, overlay: FileConfig) -> FileConfig {
    let base_defaults = base.defaults.unwrap_or_default();
    let overlay_defaults = overlay.defaults.unwrap_or_default();

    FileConfig {
        defaults: Some(DefaultsConfig {
            concurrency: overlay_defaults.concurrency.or(base_defaults.concurrency),
            timeout: overlay_defaults.timeout.or(base_defaults.timeout),
            pretty: overlay_defaults.pretty.or(base_defaults.pretty),
        }),
    }
}

/// Resolve the XDG config directory ($XDG_CONFIG_HOME or ~/.config).
fn xdg_config_home() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        if !xdg.trim().is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }
    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Load configuration overrides from environment variables.
///
/// Invalid values are ignored (with a warning in verbose mode) rather than
/// aborting the run.
pub fn load_env_config(verbose: bool) -> EnvConfig {
    let mut env_config = EnvConfig::default();

    // SC_CONCURRENCY - worker pool size
    if let Ok(val) = env::var("SC_CONCURRENCY") {
        match val.parse::<usize>() {
            Ok(concurrency) if concurrency > 0 && concurrency <= 1024 => {
                env_config.concurrency = Some(concurrency);
                if verbose {
                    println!("Using SC_CONCURRENCY={}", concurrency);
                }
            }
            _ => {
                if verbose {
                    eprintln!("Warning: invalid SC_CONCURRENCY='{}', must be 1-1024", val);
                }
            }
        }
    }

    // SC_TIMEOUT - per-request timeout in seconds
    if let Ok(val) = env::var("SC_TIMEOUT") {
        match val.parse::<u64>() {
            Ok(timeout) if timeout > 0 => {
                env_config.timeout = Some(timeout);
                if verbose {
                    println!("Using SC_TIMEOUT={}", timeout);
                }
            }
            _ => {
                if verbose {
                    eprintln!("Warning: invalid SC_TIMEOUT='{}', must be a positive integer", val);
                }
            }
        }
    }

    env_config
}
