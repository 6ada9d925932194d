//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! invoicing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for products and request items
//! - `policies`: Tax policy doubles (fixed, recording, failing)
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod policies;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use policies::*;
pub use assertions::*;
pub use generators::*;
