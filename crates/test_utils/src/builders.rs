//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{ClientData, Money, ProductId};
use domain_catalog::{Product, ProductSnapshot, ProductType};
use domain_invoicing::{InvoiceRequest, RequestItem};

use crate::fixtures::{ClientFixtures, IdFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for constructing catalog products
pub struct TestProductBuilder {
    id: ProductId,
    name: String,
    product_type: ProductType,
    price: Money,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::product_id(),
            name: "testProduct".to_string(),
            product_type: ProductType::Drug,
            price: MoneyFixtures::pln_1(),
        }
    }

    /// Sets the product ID
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    /// Sets the product name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the product type
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    /// Sets the unit price
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        Product::new(self.id, self.name, self.product_type, self.price)
            .expect("test product must be valid")
    }

    /// Builds the product and snapshots it at the fixture time
    pub fn snapshot(self) -> ProductSnapshot {
        self.build().generate_snapshot_at(TemporalFixtures::snapshot_time())
    }
}

/// Builder for constructing request items
pub struct TestRequestItemBuilder {
    product: ProductSnapshot,
    quantity: u32,
    total_cost: Money,
}

impl Default for TestRequestItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRequestItemBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            product: TestProductBuilder::new().snapshot(),
            quantity: 1,
            total_cost: MoneyFixtures::pln_1(),
        }
    }

    /// Sets the product snapshot
    pub fn with_product(mut self, product: ProductSnapshot) -> Self {
        self.product = product;
        self
    }

    /// Sets the product type, keeping the rest of the current snapshot
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product = ProductSnapshot::new(
            self.product.product_id(),
            self.product.name(),
            product_type,
            self.product.price(),
            self.product.snapshot_date(),
        );
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the total pre-tax cost
    pub fn with_total_cost(mut self, total_cost: Money) -> Self {
        self.total_cost = total_cost;
        self
    }

    /// Builds the request item
    pub fn build(self) -> RequestItem {
        RequestItem::new(self.product, self.quantity, self.total_cost)
            .expect("test request item must be valid")
    }
}

/// Builder for constructing invoice requests
pub struct TestInvoiceRequestBuilder {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl Default for TestInvoiceRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceRequestBuilder {
    /// Creates a builder for an empty request from the fixture client
    pub fn new() -> Self {
        Self {
            client: ClientFixtures::client(),
            items: Vec::new(),
        }
    }

    /// Sets the client
    pub fn with_client(mut self, client: ClientData) -> Self {
        self.client = client;
        self
    }

    /// Adds one item
    pub fn with_item(mut self, item: RequestItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds `count` default items
    pub fn with_default_items(mut self, count: usize) -> Self {
        self.items
            .extend((0..count).map(|_| TestRequestItemBuilder::new().build()));
        self
    }

    /// Builds the request
    pub fn build(self) -> InvoiceRequest {
        let mut request = InvoiceRequest::new(self.client);
        for item in self.items {
            request.add(item);
        }
        request
    }
}
