use serde::Serialize;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for run-level inputs; the whole run is refused
    #[error("Validation error: {0}")]
    Validation(String),

    /// No single active, effective rate configuration for the requested key.
    /// Fatal for the affected employee only, never retried.
    #[error("No active rate table: {0}")]
    NoActiveRateTable(String),

    /// Malformed administrator configuration (bracket tables, rates)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure reading or writing leave balances, YTD profiles or rate records
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn no_active_rate_table(msg: impl Into<String>) -> Self {
        AppError::NoActiveRateTable(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Serializable failure record for batch reports
#[derive(Debug, Clone, Serialize)]
pub struct FailureReason {
    pub kind: String,
    pub message: String,
}

impl From<&AppError> for FailureReason {
    fn from(err: &AppError) -> Self {
        let kind = match err {
            AppError::Validation(_) => "validation",
            AppError::NoActiveRateTable(_) => "no_active_rate_table",
            AppError::Configuration(_) => "configuration",
            AppError::NotFound(_) => "not_found",
            AppError::Persistence(_) => "persistence",
            AppError::Json(_) => "json",
            AppError::Yaml(_) => "yaml",
            AppError::Internal(_) => "internal",
        };
        FailureReason {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }
}
