//! Property-based tests for invoice totals.

use kirana_shared::types::ItemId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::totals::InvoiceTotals;
use super::types::LineItem;
use crate::pricing::{Discount, TaxRates};

/// Strategy to generate a cart line (integer paise quantities/rates, GST slabs).
fn cart_line() -> impl Strategy<Value = LineItem> {
    (
        1i64..=500i64,
        0i64..=1_000_000i64,
        0i64..=5_000i64,
        prop::sample::select(vec![0i64, 250, 500, 600, 900, 1400, 1800]),
    )
        .prop_map(|(qty, rate_paise, discount_bp, rate_bp)| {
            let half = Decimal::new(rate_bp, 2);
            LineItem::new(
                ItemId::new(),
                "Item",
                "pcs",
                Decimal::from(qty),
                Decimal::new(rate_paise, 2),
                Discount::percentage(Decimal::new(discount_bp, 2)),
                TaxRates::new(half, half, Decimal::ZERO),
            )
            .unwrap()
        })
}

fn cart() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(cart_line(), 0..8)
}

/// Strategy to generate an overall percentage discount (0-50%).
fn overall_discount() -> impl Strategy<Value = Discount> {
    (0i64..=5_000i64).prop_map(|bp| Discount::percentage(Decimal::new(bp, 2)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* cart, recomputing totals on an unchanged line set yields
    /// identical totals (no drift).
    #[test]
    fn prop_totals_are_idempotent(lines in cart(), discount in overall_discount()) {
        let first = InvoiceTotals::compute(&lines, discount).unwrap();
        let second = InvoiceTotals::compute(&lines, discount).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* cart, the grand total is the discounted base plus the
    /// unscaled tax totals.
    #[test]
    fn prop_grand_total_composition(lines in cart(), discount in overall_discount()) {
        let totals = InvoiceTotals::compute(&lines, discount).unwrap();
        prop_assert_eq!(
            totals.grand_total,
            totals.total_after_discount
                + totals.cgst_total
                + totals.sgst_total
                + totals.igst_total
        );
    }

    /// *For any* cart, the round-off never exceeds half a rupee in
    /// magnitude.
    #[test]
    fn prop_round_off_bounded(lines in cart(), discount in overall_discount()) {
        let totals = InvoiceTotals::compute(&lines, discount).unwrap();
        let half = Decimal::new(5, 1);
        prop_assert!(totals.round_off <= half);
        prop_assert!(totals.round_off >= -half);
    }

    /// *For any* cart, line order does not change the totals.
    #[test]
    fn prop_totals_ignore_line_order(lines in cart(), discount in overall_discount()) {
        let forward = InvoiceTotals::compute(&lines, discount).unwrap();
        let mut reversed = lines;
        reversed.reverse();
        let backward = InvoiceTotals::compute(&reversed, discount).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
