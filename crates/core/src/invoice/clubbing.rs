//! Duplicate-line clubbing.
//!
//! When the same item is scanned or selected twice, the new entry is merged
//! into the matching cart line instead of appearing as a duplicate row.

use rust_decimal::Decimal;

use super::types::LineItem;
use crate::pricing::{Discount, DiscountKind, PricingError};

/// Result of clubbing a line into a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubOutcome {
    /// The new line was merged into the cart line at this index.
    Merged(usize),
    /// No matching line; the new line was appended.
    Appended,
}

/// Merges a finalized line into the cart, or appends it.
///
/// Lines match when `item_id`, `rate`, and all three tax rates are
/// identical. On a merge the quantities are summed and the existing line's
/// discount is rescaled: an absolute discount is a *total* for the line, so
/// it grows proportionally to the combined quantity
/// (`existing.discount / existing.qty * combined_qty`); a percentage
/// discount carries over unchanged since it already scales with the gross.
/// The merged line's amounts are then recomputed.
///
/// # Errors
///
/// Returns an error if the merged line fails pricing validation; the cart
/// is left unchanged in that case.
pub fn club_line(cart: &mut Vec<LineItem>, new_line: LineItem) -> Result<ClubOutcome, PricingError> {
    let matched = cart.iter().position(|line| {
        line.item_id == new_line.item_id
            && line.rate == new_line.rate
            && line.tax == new_line.tax
            && line.box_packaging.is_none()
            && new_line.box_packaging.is_none()
    });

    let Some(index) = matched else {
        cart.push(new_line);
        return Ok(ClubOutcome::Appended);
    };

    let existing = &cart[index];
    let combined_quantity = existing.quantity + new_line.quantity;
    let combined_discount = match existing.discount.kind {
        DiscountKind::Amount => {
            // Discount is a line total; rescale to the combined quantity.
            let per_unit = if existing.quantity.is_zero() {
                Decimal::ZERO
            } else {
                existing.discount.value / existing.quantity
            };
            Discount::amount(per_unit * combined_quantity)
        }
        DiscountKind::Percentage => existing.discount,
    };

    let mut merged = existing.clone();
    merged.quantity = combined_quantity;
    merged.discount = combined_discount;
    merged.recompute()?;
    cart[index] = merged;

    Ok(ClubOutcome::Merged(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::TaxRates;
    use kirana_shared::types::ItemId;
    use rust_decimal_macros::dec;

    fn line(
        item_id: ItemId,
        quantity: Decimal,
        rate: Decimal,
        discount: Discount,
        tax: TaxRates,
    ) -> LineItem {
        LineItem::new(item_id, "Item", "pcs", quantity, rate, discount, tax).unwrap()
    }

    #[test]
    fn test_matching_lines_merge_with_rescaled_discount() {
        let item_id = ItemId::new();
        let tax = TaxRates::new(dec!(9), dec!(9), dec!(0));
        let mut cart = vec![line(item_id, dec!(3), dec!(100), Discount::amount(dec!(30)), tax)];

        let outcome = club_line(
            &mut cart,
            line(item_id, dec!(2), dec!(100), Discount::amount(dec!(20)), tax),
        )
        .unwrap();

        assert_eq!(outcome, ClubOutcome::Merged(0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, dec!(5));
        // 30 total over 3 units rescales to 50 over 5 units.
        assert_eq!(cart[0].discount.value, dec!(50));
        assert_eq!(cart[0].amounts.taxable_amount, dec!(450));
    }

    #[test]
    fn test_different_rate_appends() {
        let item_id = ItemId::new();
        let tax = TaxRates::zero();
        let mut cart = vec![line(item_id, dec!(1), dec!(100), Discount::none(), tax)];

        let outcome =
            club_line(&mut cart, line(item_id, dec!(1), dec!(90), Discount::none(), tax)).unwrap();

        assert_eq!(outcome, ClubOutcome::Appended);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_different_tax_rates_append() {
        let item_id = ItemId::new();
        let mut cart = vec![line(
            item_id,
            dec!(1),
            dec!(100),
            Discount::none(),
            TaxRates::new(dec!(9), dec!(9), dec!(0)),
        )];

        let outcome = club_line(
            &mut cart,
            line(
                item_id,
                dec!(1),
                dec!(100),
                Discount::none(),
                TaxRates::new(dec!(0), dec!(0), dec!(18)),
            ),
        )
        .unwrap();

        assert_eq!(outcome, ClubOutcome::Appended);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_different_item_appends() {
        let tax = TaxRates::zero();
        let mut cart = vec![line(ItemId::new(), dec!(1), dec!(100), Discount::none(), tax)];

        let outcome = club_line(
            &mut cart,
            line(ItemId::new(), dec!(1), dec!(100), Discount::none(), tax),
        )
        .unwrap();

        assert_eq!(outcome, ClubOutcome::Appended);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_percentage_discount_carries_over() {
        let item_id = ItemId::new();
        let tax = TaxRates::zero();
        let mut cart =
            vec![line(item_id, dec!(4), dec!(50), Discount::percentage(dec!(10)), tax)];

        club_line(&mut cart, line(item_id, dec!(6), dec!(50), Discount::none(), tax)).unwrap();

        assert_eq!(cart[0].quantity, dec!(10));
        assert_eq!(cart[0].discount, Discount::percentage(dec!(10)));
        // 500 gross less 10% = 450.
        assert_eq!(cart[0].amounts.taxable_amount, dec!(450));
    }

    #[test]
    fn test_merging_same_line_twice_scales_linearly() {
        let item_id = ItemId::new();
        let tax = TaxRates::zero();
        let mut cart = vec![line(item_id, dec!(2), dec!(10), Discount::amount(dec!(4)), tax)];

        club_line(&mut cart, line(item_id, dec!(2), dec!(10), Discount::none(), tax)).unwrap();
        club_line(&mut cart, line(item_id, dec!(2), dec!(10), Discount::none(), tax)).unwrap();

        assert_eq!(cart[0].quantity, dec!(6));
        // 4 over 2 units -> 2/unit -> 12 over 6 units.
        assert_eq!(cart[0].discount.value, dec!(12));
    }
}
