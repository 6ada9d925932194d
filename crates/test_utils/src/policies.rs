//! Tax Policy Test Doubles
//!
//! Policies that let tests control and observe what issuance asks for:
//!
//! - `FixedTaxPolicy`: returns the same tax for every call
//! - `RecordingTaxPolicy`: wraps another policy and captures every call's arguments
//! - `FailingTaxPolicy`: fails on a chosen call

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use core_kernel::Money;
use domain_catalog::ProductType;
use domain_invoicing::{Tax, TaxPolicy};
use thiserror::Error;

use crate::fixtures::MoneyFixtures;

/// Returns one fixed tax regardless of input
#[derive(Debug, Clone)]
pub struct FixedTaxPolicy {
    tax: Tax,
}

impl FixedTaxPolicy {
    pub fn new(tax: Tax) -> Self {
        Self { tax }
    }
}

impl Default for FixedTaxPolicy {
    /// Tax of 1.00 PLN labelled "tax"
    fn default() -> Self {
        Self::new(Tax::new(MoneyFixtures::pln_1(), "tax"))
    }
}

impl TaxPolicy for FixedTaxPolicy {
    type Error = Infallible;

    fn calculate_tax(&self, _product_type: ProductType, _net: &Money) -> Result<Tax, Self::Error> {
        Ok(self.tax.clone())
    }
}

/// Arguments of one captured `calculate_tax` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCall {
    pub product_type: ProductType,
    pub net: Money,
}

/// Captures every call before delegating to the wrapped policy
#[derive(Debug, Default)]
pub struct RecordingTaxPolicy<P = FixedTaxPolicy> {
    inner: P,
    calls: Mutex<Vec<TaxCall>>,
}

impl<P: TaxPolicy> RecordingTaxPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls in the order they were made
    pub fn calls(&self) -> Vec<TaxCall> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recording lock poisoned").len()
    }

    /// Number of calls made with exactly these arguments
    pub fn calls_with(&self, product_type: ProductType, net: &Money) -> usize {
        self.calls
            .lock()
            .expect("recording lock poisoned")
            .iter()
            .filter(|call| call.product_type == product_type && call.net == *net)
            .count()
    }
}

impl<P: TaxPolicy> TaxPolicy for RecordingTaxPolicy<P> {
    type Error = P::Error;

    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> Result<Tax, Self::Error> {
        self.calls
            .lock()
            .expect("recording lock poisoned")
            .push(TaxCall { product_type, net: *net });
        self.inner.calculate_tax(product_type, net)
    }
}

/// Error raised by [`FailingTaxPolicy`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tax policy rejected call {call} for {product_type}")]
pub struct PolicyRejected {
    pub call: usize,
    pub product_type: ProductType,
}

/// Succeeds with a fixed tax until the chosen call, which fails
#[derive(Debug)]
pub struct FailingTaxPolicy {
    fail_on_call: usize,
    tax: Tax,
    made: AtomicUsize,
}

impl FailingTaxPolicy {
    /// Fails on the zero-based `fail_on_call`-th call
    pub fn on_call(fail_on_call: usize) -> Self {
        Self {
            fail_on_call,
            tax: Tax::new(MoneyFixtures::pln_1(), "tax"),
            made: AtomicUsize::new(0),
        }
    }

    /// Calls made so far, including the failing one
    pub fn calls_made(&self) -> usize {
        self.made.load(Ordering::SeqCst)
    }
}

impl TaxPolicy for FailingTaxPolicy {
    type Error = PolicyRejected;

    fn calculate_tax(&self, product_type: ProductType, _net: &Money) -> Result<Tax, Self::Error> {
        let call = self.made.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_on_call {
            return Err(PolicyRejected { call, product_type });
        }
        Ok(self.tax.clone())
    }
}
