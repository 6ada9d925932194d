//! Core Kernel - Foundational types shared by the invoicing domains
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and a single rounding rule
//! - Strongly-typed identifiers
//! - The opaque client reference carried from request to invoice

pub mod money;
pub mod identifiers;
pub mod client;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{ClientId, ProductId};
pub use client::ClientData;
pub use error::CoreError;
