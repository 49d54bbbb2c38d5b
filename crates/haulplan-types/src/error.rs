//! Error types for haulplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid vehicle catalog: {0}")]
    InvalidCatalog(String),
}

/// Rejected cargo input. Raised before any optimization runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} is too large (got {value})")]
    TooLarge { field: &'static str, value: f64 },

    #[error("Unknown fragility category: {0}")]
    UnknownFragility(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Unknown vehicle class: {0}")]
    UnknownVehicle(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = Error::from(InputError::NonPositive {
            field: "quantity",
            value: 0.0,
        });
        assert_eq!(
            err.to_string(),
            "Invalid input: quantity must be greater than zero (got 0)"
        );
    }

    #[test]
    fn test_config_error_wraps() {
        let err = Error::from(ConfigError::InvalidCatalog("duplicate name".to_string()));
        assert!(err.to_string().contains("duplicate name"));
    }
}
