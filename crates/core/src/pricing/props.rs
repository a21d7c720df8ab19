//! Property-based tests for line amount computation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calc::compute_line;
use super::types::{Discount, DiscountKind, LineInput, TaxRates};

/// Strategy to generate positive quantities (0.01 to 10,000.00).
fn positive_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate non-negative rates (0.00 to 100,000.00).
fn non_negative_rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate percentage discounts (0.00 to 100.00).
fn percentage_discount() -> impl Strategy<Value = Discount> {
    (0i64..=10_000i64).prop_map(|v| Discount::percentage(Decimal::new(v, 2)))
}

/// Strategy to generate tax rates (0.00 to 28.00, typical GST slabs).
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2_800i64).prop_map(|v| Decimal::new(v, 2))
}

fn tax_rates() -> impl Strategy<Value = TaxRates> {
    (tax_rate(), tax_rate(), tax_rate()).prop_map(|(cgst, sgst, igst)| TaxRates { cgst, sgst, igst })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* valid line, the total is exactly the taxable amount plus
    /// all three taxes.
    #[test]
    fn prop_total_is_taxable_plus_taxes(
        quantity in positive_quantity(),
        rate in non_negative_rate(),
        discount in percentage_discount(),
        tax in tax_rates(),
    ) {
        let input = LineInput { quantity, rate, discount, tax, box_packaging: None };
        let amounts = compute_line(&input).unwrap();
        prop_assert_eq!(
            amounts.total_amount,
            amounts.taxable_amount + amounts.cgst + amounts.sgst + amounts.igst
        );
    }

    /// *For any* valid line with a zero percentage discount, the taxable
    /// amount equals quantity * rate.
    #[test]
    fn prop_zero_percentage_is_identity(
        quantity in positive_quantity(),
        rate in non_negative_rate(),
        tax in tax_rates(),
    ) {
        let input = LineInput {
            quantity,
            rate,
            discount: Discount { kind: DiscountKind::Percentage, value: Decimal::ZERO },
            tax,
            box_packaging: None,
        };
        let amounts = compute_line(&input).unwrap();
        prop_assert_eq!(amounts.taxable_amount, quantity * rate);
    }

    /// *For any* valid line, computation is deterministic.
    #[test]
    fn prop_computation_is_deterministic(
        quantity in positive_quantity(),
        rate in non_negative_rate(),
        discount in percentage_discount(),
        tax in tax_rates(),
    ) {
        let input = LineInput { quantity, rate, discount, tax, box_packaging: None };
        let first = compute_line(&input).unwrap();
        let second = compute_line(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* valid line, the taxable amount never exceeds gross and is
    /// never negative.
    #[test]
    fn prop_taxable_bounded_by_gross(
        quantity in positive_quantity(),
        rate in non_negative_rate(),
        discount in percentage_discount(),
        tax in tax_rates(),
    ) {
        let input = LineInput { quantity, rate, discount, tax, box_packaging: None };
        let amounts = compute_line(&input).unwrap();
        prop_assert!(amounts.taxable_amount >= Decimal::ZERO);
        prop_assert!(amounts.taxable_amount <= amounts.gross_amount);
    }
}
