//! Issued invoices
//!
//! Invoices and their lines are only ever assembled by
//! [`InvoiceFactory`](crate::InvoiceFactory); callers can read them but not
//! build or alter them.

use serde::Serialize;

use core_kernel::{ClientData, Currency, Money, MoneyError};
use domain_catalog::ProductSnapshot;
use crate::tax::Tax;

/// A taxed line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    product: ProductSnapshot,
    quantity: u32,
    net: Money,
    tax: Tax,
}

impl InvoiceLine {
    pub(crate) fn new(product: ProductSnapshot, quantity: u32, net: Money, tax: Tax) -> Self {
        Self {
            product,
            quantity,
            net,
            tax,
        }
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Pre-tax cost of the line
    pub fn net(&self) -> Money {
        self.net
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Net plus tax
    pub fn gross(&self) -> Result<Money, MoneyError> {
        self.net.checked_add(&self.tax.amount())
    }
}

/// A tax-inclusive invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    client: ClientData,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub(crate) fn new(client: ClientData) -> Self {
        Self {
            client,
            lines: Vec::new(),
        }
    }

    pub(crate) fn push_line(&mut self, line: InvoiceLine) {
        self.lines.push(line);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    /// Lines in the order their request items were given
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line net amounts; zero in `currency` for an empty invoice
    ///
    /// # Errors
    ///
    /// Fails with `MoneyError::CurrencyMismatch` if any line is priced in
    /// another currency.
    pub fn net_total(&self, currency: Currency) -> Result<Money, MoneyError> {
        self.lines
            .iter()
            .try_fold(Money::zero(currency), |acc, line| acc.checked_add(&line.net()))
    }

    /// Sum of line gross amounts; zero in `currency` for an empty invoice
    pub fn gross_total(&self, currency: Currency) -> Result<Money, MoneyError> {
        self.lines
            .iter()
            .try_fold(Money::zero(currency), |acc, line| acc.checked_add(&line.gross()?))
    }

    /// Sum of line tax amounts; zero in `currency` for an empty invoice
    pub fn tax_total(&self, currency: Currency) -> Result<Money, MoneyError> {
        self.lines
            .iter()
            .try_fold(Money::zero(currency), |acc, line| acc.checked_add(&line.tax().amount()))
    }
}
