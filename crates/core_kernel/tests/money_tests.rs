//! Unit tests for the Money module
//!
//! Tests cover money creation, the rounding rule, checked arithmetic,
//! currency handling, and display.

use core_kernel::{Money, Currency, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_new_rounds_midpoint_to_even() {
        assert_eq!(Money::new(dec!(0.00125), Currency::EUR).amount(), dec!(0.0012));
        assert_eq!(Money::new(dec!(0.00135), Currency::EUR).amount(), dec!(0.0014));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::PLN);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::PLN);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_equal_amounts_with_different_scale_are_equal() {
        assert_eq!(
            Money::new(dec!(1), Currency::USD),
            Money::new(dec!(1.0000), Currency::USD)
        );
    }

    #[test]
    fn test_same_amount_different_currency_not_equal() {
        assert_ne!(
            Money::new(dec!(1), Currency::USD),
            Money::new(dec!(1), Currency::EUR)
        );
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        let result = a.checked_add(&b);
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = Money::new(Decimal::MAX, Currency::USD);
        let b = Money::new(dec!(1), Currency::USD);
        assert_eq!(a.checked_add(&b), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_mul_rounds_with_the_money_rule() {
        let m = Money::new(dec!(0.99), Currency::USD);
        let result = m.checked_mul(dec!(0.08)).unwrap();
        assert_eq!(result.amount(), dec!(0.0792));

        let m = Money::new(dec!(0.1), Currency::USD);
        let result = m.checked_mul(dec!(0.00125)).unwrap();
        assert_eq!(result.amount(), dec!(0.0001));
    }

    #[test]
    fn test_checked_mul_by_zero() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert!(m.checked_mul(dec!(0)).unwrap().is_zero());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_usd() {
        let m = Money::new(dec!(100.1234), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(100.12));
    }

    #[test]
    fn test_round_to_currency_uses_bankers_rounding() {
        let m = Money::new(dec!(100.125), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(100.12));

        let m = Money::new(dec!(100.135), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(100.14));
    }

    #[test]
    fn test_round_to_currency_jpy() {
        let m = Money::new(dec!(100.60), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(101));
    }
}

mod rate {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(23));
        assert_eq!(rate.as_decimal(), dec!(0.23));
        assert_eq!(rate.as_percentage(), dec!(23));
    }

    #[test]
    fn test_rate_apply() {
        let rate = Rate::new(dec!(0.05));
        let tax = rate.apply(&Money::new(dec!(10.00), Currency::PLN)).unwrap();
        assert_eq!(tax, Money::new(dec!(0.50), Currency::PLN));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.08)).to_string(), "8%");
        assert_eq!(Rate::new(dec!(0.075)).to_string(), "7.5%");
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols() {
        let currencies = [
            Currency::USD, Currency::EUR, Currency::GBP, Currency::PLN,
            Currency::JPY, Currency::CHF, Currency::CAD,
        ];

        for currency in currencies {
            assert!(!currency.symbol().is_empty());
            assert_eq!(currency.code().len(), 3);
        }
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::PLN.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_money_serde_roundtrip_keeps_value() {
        let m = Money::new(dec!(19.99), Currency::EUR);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_currency_serializes_as_uppercase_code() {
        let json = serde_json::to_string(&Currency::PLN).unwrap();
        assert_eq!(json, "\"PLN\"");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(dec!(1234.56), Currency::USD);
        assert_eq!(m.to_string(), "$ 1234.56");
    }

    #[test]
    fn test_money_display_jpy() {
        let m = Money::new(dec!(12345), Currency::JPY);
        assert!(m.to_string().contains("¥"));
    }
}
