//! Configuration management for the `TripPlanner` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the `TripPlanner` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPlannerConfig {
    /// Search behavior
    #[serde(default)]
    pub search: SearchConfig,
    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP server settings
    #[serde(default)]
    pub web: WebConfig,
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Artificial delay before results are shown, in milliseconds
    #[serde(default = "default_simulated_latency")]
    pub simulated_latency_ms: u64,
    /// Allowed difference between requested and actual trip length
    #[serde(default = "default_duration_tolerance")]
    pub duration_tolerance_days: u32,
}

/// Catalog source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the embedded seed catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_simulated_latency() -> u64 {
    1500
}

fn default_duration_tolerance() -> u32 {
    crate::matcher::DEFAULT_DURATION_TOLERANCE_DAYS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency(),
            duration_tolerance_days: default_duration_tolerance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl TripPlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPPLANNER_WEB__PORT=9000 overrides web.port
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.web.bind_address.is_empty() {
            self.web.bind_address = default_bind_address();
        }
        if self.web.port == 0 {
            self.web.port = default_port();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.search.simulated_latency_ms > 10_000 {
            return Err(TripPlannerError::config(
                "Simulated search latency cannot exceed 10000 ms"
            ).into());
        }

        if self.search.duration_tolerance_days > 30 {
            return Err(TripPlannerError::config(
                "Duration tolerance cannot exceed 30 days"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if let Some(path) = &self.catalog.path {
            if path.as_os_str().is_empty() {
                return Err(TripPlannerError::config(
                    "Catalog path cannot be empty if provided"
                ).into());
            }
        }

        Ok(())
    }
}
