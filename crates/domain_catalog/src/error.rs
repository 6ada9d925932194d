//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product data failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Price currency differs from the product's currency
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },
}

impl CatalogError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }
}
