//! Invoicing Domain - Tax-inclusive invoice issuance
//!
//! This crate turns a client's purchase request into an invoice whose lines
//! each carry the tax computed for them by a caller-supplied [`TaxPolicy`].
//!
//! # Flow
//!
//! ```text
//! InvoiceRequest ──► BookKeeper::issuance ──► Invoice
//!                         │        ▲
//!                         ▼        │
//!                   TaxPolicy  InvoiceFactory
//! ```
//!
//! The issuance is synchronous and keeps no state between calls. A policy
//! error aborts the whole issuance and is handed back to the caller as is.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_invoicing::{BookKeeper, InvoiceRequest, RequestItem, RateTaxPolicy, TaxRatesConfig};
//!
//! let mut request = InvoiceRequest::new(client);
//! request.add(RequestItem::new(product.generate_snapshot(), 2, total_cost)?);
//!
//! let policy = RateTaxPolicy::from_config(&TaxRatesConfig::from_env()?)?;
//! let invoice = BookKeeper::default().issuance(&request, &policy)?;
//! ```

pub mod tax;
pub mod request;
pub mod invoice;
pub mod factory;
pub mod book_keeper;
pub mod rate_policy;
pub mod settings;
pub mod error;

pub use tax::{Tax, TaxPolicy};
pub use request::{InvoiceRequest, RequestItem};
pub use invoice::{Invoice, InvoiceLine};
pub use factory::InvoiceFactory;
pub use book_keeper::BookKeeper;
pub use rate_policy::RateTaxPolicy;
pub use settings::{CategoryRateConfig, TaxRatesConfig};
pub use error::{InvoicingError, TaxPolicyError};
