//! Invoice requests
//!
//! A request is the caller's description of a pending purchase, before any
//! tax is applied. Items are validated when they are built; issuance trusts
//! them.

use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{ClientData, Money};
use domain_catalog::ProductSnapshot;
use crate::error::InvoicingError;

/// One purchased product within a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestItem {
    product: ProductSnapshot,
    quantity: u32,
    total_cost: Money,
}

impl RequestItem {
    /// Creates a request item
    ///
    /// # Arguments
    ///
    /// * `product` - Product data frozen at request time
    /// * `quantity` - Number of units, must be positive
    /// * `total_cost` - Pre-tax cost of all units together, must not be negative
    ///
    /// # Errors
    ///
    /// Returns `InvoicingError::Validation` for a zero quantity or a negative
    /// total cost
    pub fn new(product: ProductSnapshot, quantity: u32, total_cost: Money) -> Result<Self, InvoicingError> {
        if quantity == 0 {
            return Err(InvoicingError::validation("quantity must be positive"));
        }
        if total_cost.is_negative() {
            return Err(InvoicingError::validation(format!(
                "total cost must not be negative, got {}",
                total_cost
            )));
        }

        Ok(Self {
            product,
            quantity,
            total_cost,
        })
    }

    /// Creates an item whose total cost is the snapshot's unit price times quantity
    pub fn priced_from_snapshot(product: ProductSnapshot, quantity: u32) -> Result<Self, InvoicingError> {
        let total_cost = product.price().checked_mul(quantity.into())?;
        Self::new(product, quantity, total_cost)
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Pre-tax cost of the whole item
    pub fn total_cost(&self) -> &Money {
        &self.total_cost
    }
}

#[derive(Deserialize)]
struct RequestItemRaw {
    product: ProductSnapshot,
    quantity: u32,
    total_cost: Money,
}

impl<'de> Deserialize<'de> for RequestItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RequestItemRaw::deserialize(deserializer)?;
        RequestItem::new(raw.product, raw.quantity, raw.total_cost).map_err(serde::de::Error::custom)
    }
}

/// A client's pending purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    /// Creates an empty request for the client
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// Appends an item; items keep the order they were added in
    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
