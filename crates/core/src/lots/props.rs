//! Property-based tests for lot allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::{clamp_allocations, validate_allocations};
use super::types::Lot;

/// Strategy to generate a parent quantity (1 to 1,000).
fn parent_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000i64).prop_map(Decimal::from)
}

/// Strategy to generate lot quantities (1 to 200 each, up to 12 lots).
fn lot_quantities() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((1i64..=200i64).prop_map(Decimal::from), 0..12)
}

fn make_lots(quantities: &[Decimal]) -> Vec<Lot> {
    quantities
        .iter()
        .enumerate()
        .map(|(i, q)| Lot::batch(format!("B{i}"), *q))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* allocation, after clamping the sum never exceeds the
    /// parent quantity.
    #[test]
    fn prop_clamp_never_exceeds_parent(
        parent in parent_quantity(),
        quantities in lot_quantities(),
    ) {
        let mut lots = make_lots(&quantities);
        clamp_allocations(parent, &mut lots);
        let sum: Decimal = lots.iter().map(|l| l.quantity).sum();
        prop_assert!(sum <= parent);
    }

    /// *For any* allocation already within bounds, clamping changes nothing.
    #[test]
    fn prop_clamp_is_noop_when_valid(
        parent in parent_quantity(),
        quantities in lot_quantities(),
    ) {
        let total: Decimal = quantities.iter().copied().sum();
        prop_assume!(total <= parent);
        let mut lots = make_lots(&quantities);
        let before = lots.clone();
        let trimmed = clamp_allocations(parent, &mut lots);
        prop_assert_eq!(trimmed, Decimal::ZERO);
        prop_assert_eq!(lots, before);
    }

    /// *For any* over-allocation, earlier entries keep their quantity until
    /// all later entries are exhausted.
    #[test]
    fn prop_clamp_preserves_earlier_entries(
        parent in parent_quantity(),
        quantities in lot_quantities(),
    ) {
        let mut lots = make_lots(&quantities);
        clamp_allocations(parent, &mut lots);
        // If an entry lost any quantity, every later entry was zeroed first.
        for i in 0..lots.len() {
            if lots[i].quantity < quantities[i] {
                for later in &lots[i + 1..] {
                    prop_assert!(later.quantity.is_zero());
                }
            }
        }
    }

    /// *For any* allocation, clamping then validating succeeds (provided no
    /// entry was trimmed to zero, which validation rejects as non-positive).
    #[test]
    fn prop_clamp_then_validate_sum_holds(
        parent in parent_quantity(),
        quantities in lot_quantities(),
    ) {
        let mut lots = make_lots(&quantities);
        clamp_allocations(parent, &mut lots);
        lots.retain(|l| l.quantity > Decimal::ZERO);
        prop_assert!(validate_allocations(parent, &lots).is_ok());
    }
}
