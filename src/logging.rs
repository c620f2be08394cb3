//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and to `tower_http`. Logs go to stderr so command output stays clean.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber. `verbose` forces debug level.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn default_directives(level: &str) -> String {
    format!("tripplanner={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("warn"), "tripplanner=warn,tower_http=warn");
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = LoggingConfig::default();
        // whichever call comes first wins; the other must fail cleanly
        let first = init(&config, false);
        let second = init(&config, true);
        assert!(first.is_err() || second.is_err());
    }
}
