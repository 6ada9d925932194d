//! Tax values and the tax policy port
//!
//! The invoicing core never decides how much tax is due. It hands each
//! line's category and pre-tax total to a [`TaxPolicy`] supplied by the
//! caller and stores whatever [`Tax`] comes back.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_catalog::ProductType;

/// Tax computed for one invoice line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    /// Creates a tax value
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Returns the tax amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the label supplied by the policy
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Rule mapping a product category and a pre-tax amount to a tax
///
/// Issuance calls [`calculate_tax`](TaxPolicy::calculate_tax) exactly once per
/// request item, passing the item's total pre-tax cost (quantity already
/// applied), never the unit price.
///
/// Implementations should be pure functions of their arguments. A policy
/// shared between threads that issue invoices concurrently must be `Sync`;
/// issuance itself does not require it.
pub trait TaxPolicy {
    /// Failure type returned unchanged from issuance
    type Error: std::error::Error;

    /// Computes the tax due on `net` for a product of the given category
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> Result<Tax, Self::Error>;
}
