//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. Fixtures are deterministic so that two
//! calls produce equal values.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClientData, ClientId, Currency, Money, ProductId};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// One unit of PLN
    pub fn pln_1() -> Money {
        Money::new(dec!(1.00), Currency::PLN)
    }

    /// Ten units of PLN
    pub fn pln_10() -> Money {
        Money::new(dec!(10.00), Currency::PLN)
    }

    /// A zero amount
    pub fn pln_zero() -> Money {
        Money::zero(Currency::PLN)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_10() -> Money {
        Money::new(dec!(10.00), Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed snapshot time (Mar 1, 2024 09:30 UTC)
    pub fn snapshot_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic client ID for testing
    pub fn client_id() -> ClientId {
        ClientId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440011").unwrap())
    }

    /// Creates a deterministic product ID for testing
    pub fn product_id() -> ProductId {
        ProductId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440012").unwrap())
    }
}

/// Fixture for client test data
pub struct ClientFixtures;

impl ClientFixtures {
    /// A deterministic client reference
    pub fn client() -> ClientData {
        ClientData::new(IdFixtures::client_id(), "test").unwrap()
    }
}
