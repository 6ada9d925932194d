//! Invoicing domain errors

use core_kernel::MoneyError;
use domain_catalog::ProductType;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building requests or reading invoice figures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoicingError {
    /// Request data failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl InvoicingError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        InvoicingError::Validation(message.into())
    }
}

/// Errors raised by [`RateTaxPolicy`](crate::RateTaxPolicy) and its configuration
#[derive(Debug, Error)]
pub enum TaxPolicyError {
    /// No rate is configured for the category
    #[error("No tax rate configured for product type {0}")]
    UnknownCategory(ProductType),

    /// A configured rate lies outside 0..=1
    #[error("Invalid tax rate {rate} for product type {product_type}")]
    InvalidRate {
        product_type: ProductType,
        rate: Decimal,
    },

    /// Tax amount could not be computed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Rate table could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}
