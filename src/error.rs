//! Custom error types for the kitchen manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for kitchen operations
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (bad number, malformed date, unknown unit, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A required data table does not exist
    #[error("Data file missing: {0}")]
    DataFileMissing(String),

    /// A data table exists but cannot be used
    #[error("Data file corrupt: {0}")]
    DataFileCorrupt(String),

    /// Expiry classifier errors
    #[error("Model error: {0}")]
    Model(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Input stream closed while the menu was waiting for an answer
    #[error("Input closed")]
    InputClosed,
}

impl KitchenError {
    /// Create a "not found" error for ingredients
    pub fn ingredient_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ingredient",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for recipes
    pub fn recipe_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recipe",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error comes from a missing or unusable data table
    pub fn is_data_file(&self) -> bool {
        matches!(self, Self::DataFileMissing(_) | Self::DataFileCorrupt(_))
    }
}

impl From<std::io::Error> for KitchenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for KitchenError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kitchen operations
pub type KitchenResult<T> = Result<T, KitchenError>;
