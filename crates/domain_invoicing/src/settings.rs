//! Tax rate table configuration
//!
//! Rates are read with the `config` crate. Defaults cover every product type,
//! and any of them can be overridden from the environment:
//!
//! * `TAX_DRUG_RATE`, `TAX_DRUG_LABEL`
//! * `TAX_FOOD_RATE`, `TAX_FOOD_LABEL`
//! * `TAX_STANDARD_RATE`, `TAX_STANDARD_LABEL`
//!
//! Rates are decimals (`0.08` for 8%).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use domain_catalog::ProductType;

/// Rate and label for one product type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRateConfig {
    pub rate: Decimal,
    pub label: String,
}

/// Tax rates for every product type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxRatesConfig {
    pub drug: CategoryRateConfig,
    pub food: CategoryRateConfig,
    pub standard: CategoryRateConfig,
}

impl Default for TaxRatesConfig {
    fn default() -> Self {
        Self {
            drug: CategoryRateConfig {
                rate: dec!(0.05),
                label: "VAT".to_string(),
            },
            food: CategoryRateConfig {
                rate: dec!(0.08),
                label: "VAT".to_string(),
            },
            standard: CategoryRateConfig {
                rate: dec!(0.23),
                label: "VAT".to_string(),
            },
        }
    }
}

impl TaxRatesConfig {
    /// Loads rates from `TAX_` environment variables on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Config::builder().add_source(
                Environment::with_prefix("TAX")
                    .prefix_separator("_")
                    .separator("_"),
            ),
        )
    }

    /// Loads rates from the builder's sources on top of the defaults
    pub fn load(mut builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        for product_type in ProductType::ALL {
            let entry = defaults.for_type(product_type);
            builder = builder
                .set_default(format!("{}.rate", product_type.code()), entry.rate.to_string())?
                .set_default(format!("{}.label", product_type.code()), entry.label.clone())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Returns the entry for a product type
    pub fn for_type(&self, product_type: ProductType) -> &CategoryRateConfig {
        match product_type {
            ProductType::Drug => &self.drug,
            ProductType::Food => &self.food,
            ProductType::Standard => &self.standard,
        }
    }
}
