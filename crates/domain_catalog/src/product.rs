//! Products and product snapshots
//!
//! `Product` is the live catalog entry and may be repriced. `ProductSnapshot`
//! is the frozen copy a purchase request holds on to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{Money, ProductId};
use crate::error::CatalogError;

/// Product category, used by tax policies to pick a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Medicines and pharmacy goods
    Drug,
    /// Groceries
    Food,
    /// Everything else
    Standard,
}

impl ProductType {
    /// All known categories, in declaration order
    pub const ALL: [ProductType; 3] = [ProductType::Drug, ProductType::Food, ProductType::Standard];

    /// Returns the stable code used in configuration keys
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Drug => "drug",
            ProductType::Food => "food",
            ProductType::Standard => "standard",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A live catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    product_type: ProductType,
    price: Money,
}

impl Product {
    /// Creates a new product
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name is blank or the price
    /// is negative
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        product_type: ProductType,
        price: Money,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("product name must not be blank"));
        }
        ensure_non_negative(&price)?;

        Ok(Self {
            id,
            name,
            product_type,
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Changes the catalog price
    ///
    /// Snapshots taken before the change keep the old price.
    pub fn change_price(&mut self, new_price: Money) -> Result<(), CatalogError> {
        if new_price.currency() != self.price.currency() {
            return Err(CatalogError::CurrencyMismatch {
                expected: self.price.currency().to_string(),
                actual: new_price.currency().to_string(),
            });
        }
        ensure_non_negative(&new_price)?;

        debug!(product_id = %self.id, old = %self.price, new = %new_price, "product repriced");
        self.price = new_price;
        Ok(())
    }

    /// Takes a snapshot of the product as of now
    pub fn generate_snapshot(&self) -> ProductSnapshot {
        self.generate_snapshot_at(Utc::now())
    }

    /// Takes a snapshot of the product stamped with the given time
    pub fn generate_snapshot_at(&self, snapshot_date: DateTime<Utc>) -> ProductSnapshot {
        ProductSnapshot {
            product_id: self.id,
            name: self.name.clone(),
            product_type: self.product_type,
            price: self.price,
            snapshot_date,
        }
    }
}

#[derive(Deserialize)]
struct ProductRaw {
    id: ProductId,
    name: String,
    product_type: ProductType,
    price: Money,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = ProductRaw::deserialize(deserializer)?;
        Product::new(raw.id, raw.name, raw.product_type, raw.price).map_err(serde::de::Error::custom)
    }
}

fn ensure_non_negative(price: &Money) -> Result<(), CatalogError> {
    if price.is_negative() {
        return Err(CatalogError::validation(format!(
            "product price must not be negative, got {}",
            price
        )));
    }
    Ok(())
}

/// Immutable point-in-time copy of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    product_id: ProductId,
    name: String,
    product_type: ProductType,
    price: Money,
    snapshot_date: DateTime<Utc>,
}

impl ProductSnapshot {
    /// Materializes a snapshot from catalog data held elsewhere
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        product_type: ProductType,
        price: Money,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            product_type,
            price,
            snapshot_date,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Unit price at snapshot time
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn snapshot_date(&self) -> DateTime<Utc> {
        self.snapshot_date
    }
}
