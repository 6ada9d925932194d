//! Product Catalog Domain
//!
//! Holds the catalog side of invoicing: the live [`Product`] and the immutable
//! [`ProductSnapshot`] that purchase requests carry. A snapshot is copied from
//! the product at request time, so an invoice issued later is unaffected by
//! price changes made in the catalog in between.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalog::{Product, ProductType};
//!
//! let product = Product::new(ProductId::new(), "Aspirin", ProductType::Drug, price)?;
//! let snapshot = product.generate_snapshot();
//! ```

pub mod product;
pub mod error;

pub use product::{Product, ProductSnapshot, ProductType};
pub use error::CatalogError;
