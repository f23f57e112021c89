//! Error types for forecast input handling.

use thiserror::Error;

/// Result type alias using ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Errors raised while loading or addressing forecast inputs.
///
/// Missing scalar values inside a detailed forecast are never errors; they
/// default at the layer level.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Failed to read forecast data: {0}")]
    DataReadError(String),

    #[error("Invalid forecast data: {0}")]
    ParseError(String),
}

impl ForecastError {
    /// Whether the error was caused by the caller (bad key, bad argument)
    /// rather than by the data files.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ForecastError::LayerNotFound(_)
                | ForecastError::ZoneNotFound(_)
                | ForecastError::InvalidParameter { .. }
        )
    }
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::DataReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::ParseError(format!("JSON error: {}", err))
    }
}
