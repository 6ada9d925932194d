//! Rate-table tax policy
//!
//! A ready-made [`TaxPolicy`] that charges a flat rate per product type.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{Money, Rate};
use domain_catalog::ProductType;
use crate::settings::TaxRatesConfig;
use crate::error::TaxPolicyError;
use crate::tax::{Tax, TaxPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RateEntry {
    rate: Rate,
    label: String,
}

/// Flat per-category tax rates
///
/// The tax on a line is `net * rate`, rounded by the `Money` rule. The
/// description reads `"<label> <rate>"`, e.g. `"VAT 8%"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTaxPolicy {
    rates: HashMap<ProductType, RateEntry>,
}

impl RateTaxPolicy {
    /// Creates a policy with no rates; every category is unknown until set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for a product type
    ///
    /// # Errors
    ///
    /// Returns `TaxPolicyError::InvalidRate` unless `0 <= rate <= 1`
    pub fn with_rate(
        mut self,
        product_type: ProductType,
        rate: Rate,
        label: impl Into<String>,
    ) -> Result<Self, TaxPolicyError> {
        let value = rate.as_decimal();
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(TaxPolicyError::InvalidRate {
                product_type,
                rate: value,
            });
        }

        self.rates.insert(
            product_type,
            RateEntry {
                rate,
                label: label.into(),
            },
        );
        Ok(self)
    }

    /// Builds a policy covering every product type in the configuration
    pub fn from_config(config: &TaxRatesConfig) -> Result<Self, TaxPolicyError> {
        ProductType::ALL.into_iter().try_fold(Self::new(), |policy, product_type| {
            let entry = config.for_type(product_type);
            policy.with_rate(product_type, Rate::new(entry.rate), entry.label.clone())
        })
    }

    /// Builds a policy from `TAX_` environment variables on top of the default rates
    ///
    /// # Errors
    ///
    /// Returns `TaxPolicyError::Configuration` if the variables cannot be read
    /// as rates, or `TaxPolicyError::InvalidRate` for a rate outside `0..=1`
    pub fn from_env() -> Result<Self, TaxPolicyError> {
        let config = TaxRatesConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Returns the configured rate for a product type
    pub fn rate_for(&self, product_type: ProductType) -> Option<Rate> {
        self.rates.get(&product_type).map(|entry| entry.rate)
    }
}

impl TaxPolicy for RateTaxPolicy {
    type Error = TaxPolicyError;

    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> Result<Tax, Self::Error> {
        let entry = self
            .rates
            .get(&product_type)
            .ok_or(TaxPolicyError::UnknownCategory(product_type))?;

        let amount = entry.rate.apply(net)?;
        debug!(%product_type, %net, %amount, rate = %entry.rate, "tax calculated");

        Ok(Tax::new(amount, format!("{} {}", entry.label, entry.rate)))
    }
}
