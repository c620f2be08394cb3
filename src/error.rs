//! Error types and handling for the `TripPlanner` application

use thiserror::Error;

/// Main error type for the `TripPlanner` application
#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Search form and view transition errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Catalog loading and integrity errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// A trip package id that the catalog does not know
    #[error("Trip not found: {id}")]
    NotFound { id: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripPlannerError::Catalog { .. } => {
                "The trip catalog could not be loaded. Please check the catalog file.".to_string()
            }
            TripPlannerError::NotFound { id } => {
                format!("We couldn't find a trip called '{id}'.")
            }
            TripPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripPlannerError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripPlannerError::config("bad port");
        assert!(matches!(config_err, TripPlannerError::Config { .. }));

        let catalog_err = TripPlannerError::catalog("duplicate id");
        assert!(matches!(catalog_err, TripPlannerError::Catalog { .. }));

        let validation_err = TripPlannerError::validation("budget missing");
        assert!(matches!(validation_err, TripPlannerError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripPlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let not_found = TripPlannerError::not_found("mars-base");
        assert!(not_found.user_message().contains("mars-base"));

        let validation_err = TripPlannerError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: TripPlannerError = io_err.into();
        assert!(matches!(planner_err, TripPlannerError::Io { .. }));
    }
}
