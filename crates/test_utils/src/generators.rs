//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money, ProductId};
use domain_catalog::ProductType;
use domain_invoicing::{InvoiceRequest, RequestItem};
use proptest::prelude::*;

use crate::builders::TestProductBuilder;
use crate::fixtures::ClientFixtures;

/// Strategy for generating product types
pub fn product_type_strategy() -> impl Strategy<Value = ProductType> {
    prop_oneof![
        Just(ProductType::Drug),
        Just(ProductType::Food),
        Just(ProductType::Standard),
    ]
}

/// Strategy for generating non-negative PLN amounts in minor units
pub fn pln_cost_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::PLN))
}

/// Strategy for generating ProductId
pub fn product_id_strategy() -> impl Strategy<Value = ProductId> {
    any::<[u8; 16]>().prop_map(|bytes| ProductId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating valid request items
pub fn request_item_strategy() -> impl Strategy<Value = RequestItem> {
    (
        product_id_strategy(),
        product_type_strategy(),
        1u32..1000u32,
        pln_cost_strategy(),
    )
        .prop_map(|(id, product_type, quantity, total_cost)| {
            let snapshot = TestProductBuilder::new()
                .with_id(id)
                .with_product_type(product_type)
                .snapshot();
            RequestItem::new(snapshot, quantity, total_cost).expect("Generated invalid request item")
        })
}

/// Strategy for generating requests with up to `max_items` items
pub fn invoice_request_strategy(max_items: usize) -> impl Strategy<Value = InvoiceRequest> {
    proptest::collection::vec(request_item_strategy(), 0..=max_items).prop_map(|items| {
        let mut request = InvoiceRequest::new(ClientFixtures::client());
        for item in items {
            request.add(item);
        }
        request
    })
}
