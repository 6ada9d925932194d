//! Property-based tests for invoice issuance

use proptest::prelude::*;

use domain_invoicing::{BookKeeper, RateTaxPolicy, TaxPolicy, TaxRatesConfig};
use test_utils::{
    assert_invoice_mirrors_request, invoice_request_strategy, FixedTaxPolicy, RecordingTaxPolicy,
    TaxCall,
};

proptest! {
    #[test]
    fn issuance_yields_one_line_per_item_in_order(request in invoice_request_strategy(20)) {
        let policy = RecordingTaxPolicy::new(FixedTaxPolicy::default());

        let invoice = BookKeeper::default().issuance(&request, &policy).unwrap();

        assert_invoice_mirrors_request(&invoice, &request);
        prop_assert_eq!(policy.call_count(), request.len());
    }

    #[test]
    fn policy_arguments_match_items(request in invoice_request_strategy(20)) {
        let policy = RecordingTaxPolicy::new(FixedTaxPolicy::default());

        BookKeeper::default().issuance(&request, &policy).unwrap();

        let expected: Vec<TaxCall> = request
            .items()
            .iter()
            .map(|item| TaxCall {
                product_type: item.product().product_type(),
                net: *item.total_cost(),
            })
            .collect();
        prop_assert_eq!(policy.calls(), expected);
    }

    #[test]
    fn line_tax_equals_policy_result(request in invoice_request_strategy(20)) {
        let policy = RateTaxPolicy::from_config(&TaxRatesConfig::default()).unwrap();

        let invoice = BookKeeper::default().issuance(&request, &policy).unwrap();

        for (line, item) in invoice.lines().iter().zip(request.items()) {
            let expected = policy
                .calculate_tax(item.product().product_type(), item.total_cost())
                .unwrap();
            prop_assert_eq!(line.tax(), &expected);
        }
    }

    #[test]
    fn issuance_is_deterministic(request in invoice_request_strategy(10)) {
        let policy = RateTaxPolicy::from_config(&TaxRatesConfig::default()).unwrap();
        let book_keeper = BookKeeper::default();

        let first = book_keeper.issuance(&request, &policy).unwrap();
        let second = book_keeper.issuance(&request, &policy).unwrap();

        prop_assert_eq!(first, second);
    }
}
