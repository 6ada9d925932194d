//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_invoicing::{Invoice, InvoiceRequest};

/// Asserts that an invoice mirrors its request line by line
///
/// Checks client, line count, and for each position the product snapshot,
/// quantity and net amount.
///
/// # Panics
///
/// Panics on the first difference
pub fn assert_invoice_mirrors_request(invoice: &Invoice, request: &InvoiceRequest) {
    assert_eq!(invoice.client(), request.client(), "Invoice client differs from request client");
    assert_eq!(
        invoice.len(),
        request.len(),
        "Invoice has {} lines, request has {} items",
        invoice.len(),
        request.len()
    );

    for (index, (line, item)) in invoice.lines().iter().zip(request.items()).enumerate() {
        assert_eq!(line.product(), item.product(), "Product differs at line {}", index);
        assert_eq!(line.quantity(), item.quantity(), "Quantity differs at line {}", index);
        assert_eq!(&line.net(), item.total_cost(), "Net amount differs at line {}", index);
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
