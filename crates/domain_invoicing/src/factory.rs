//! Invoice construction
//!
//! Keeps the mechanics of building an invoice out of the issuance logic.

use core_kernel::ClientData;
use crate::invoice::{Invoice, InvoiceLine};
use crate::request::RequestItem;
use crate::tax::Tax;

/// Builds invoices one line at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceFactory;

impl InvoiceFactory {
    pub fn new() -> Self {
        Self
    }

    /// Returns an empty invoice bound to the client
    pub fn create(&self, client: ClientData) -> Invoice {
        Invoice::new(client)
    }

    /// Appends a line copied from the request item, carrying the given tax
    ///
    /// No validation happens here; the item was checked when it was built.
    pub fn add_line_item(&self, invoice: &mut Invoice, item: &RequestItem, tax: Tax) {
        invoice.push_line(InvoiceLine::new(
            item.product().clone(),
            item.quantity(),
            *item.total_cost(),
            tax,
        ));
    }
}
