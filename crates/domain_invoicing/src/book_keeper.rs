//! Invoice issuance service
//!
//! The BookKeeper turns an [`InvoiceRequest`] into an [`Invoice`] by asking a
//! [`TaxPolicy`] for the tax on every requested item.

use tracing::{debug, instrument, warn};

use crate::factory::InvoiceFactory;
use crate::invoice::Invoice;
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

/// Service that issues tax-inclusive invoices
///
/// Holds no state besides its factory, so one instance can serve any number
/// of callers.
#[derive(Debug, Clone, Default)]
pub struct BookKeeper {
    factory: InvoiceFactory,
}

impl BookKeeper {
    /// Creates a book keeper using the given invoice factory
    pub fn new(factory: InvoiceFactory) -> Self {
        Self { factory }
    }

    /// Issues an invoice for the request
    ///
    /// This method:
    /// 1. Creates an empty invoice for the request's client
    /// 2. Asks the policy for the tax on each item, in request order,
    ///    passing the item's product type and total pre-tax cost
    /// 3. Appends one taxed line per item
    ///
    /// An empty request yields an empty invoice without consulting the policy.
    ///
    /// # Errors
    ///
    /// Returns the policy's error unchanged as soon as any item fails. No
    /// further items are taxed and no partial invoice is returned.
    #[instrument(skip_all, fields(client = %request.client().id(), items = request.len()))]
    pub fn issuance<P>(&self, request: &InvoiceRequest, policy: &P) -> Result<Invoice, P::Error>
    where
        P: TaxPolicy + ?Sized,
    {
        let mut invoice = self.factory.create(request.client().clone());

        for (index, item) in request.items().iter().enumerate() {
            let product_type = item.product().product_type();
            let tax = policy
                .calculate_tax(product_type, item.total_cost())
                .inspect_err(|err| {
                    warn!(line = index, %product_type, error = %err, "tax policy rejected item");
                })?;

            debug!(
                line = index,
                %product_type,
                net = %item.total_cost(),
                tax = %tax.amount(),
                "line taxed"
            );
            self.factory.add_line_item(&mut invoice, item, tax);
        }

        debug!(lines = invoice.len(), "invoice issued");
        Ok(invoice)
    }
}
