//! Lot allocation against a parent quantity.
//!
//! Two entry points with deliberately different behavior:
//!
//! - [`clamp_allocations`] runs on every interactive edit and trims excess
//!   quantity from the newest entries so the working state stays valid.
//! - [`validate_allocations`] runs at submit time and rejects outright;
//!   nothing is silently fixed on a save path.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::LotError;
use super::types::{Lot, TrackingFlags};

/// Trims excess allocation, newest entries first.
///
/// When the lot quantities sum past the parent quantity, entries are walked
/// from the end backwards and each reduced by
/// `min(entry.quantity, remaining_excess)` until the excess is absorbed.
/// Entries added later lose quantity first.
///
/// Returns the total quantity trimmed, so a caller can show what changed.
pub fn clamp_allocations(parent_quantity: Decimal, lots: &mut [Lot]) -> Decimal {
    let allocated: Decimal = lots.iter().map(|lot| lot.quantity).sum();
    let mut excess = allocated - parent_quantity;
    if excess <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let trimmed = excess;
    for lot in lots.iter_mut().rev() {
        if excess <= Decimal::ZERO {
            break;
        }
        let cut = lot.quantity.min(excess);
        lot.quantity -= cut;
        excess -= cut;
    }
    trimmed
}

/// Validates that lot quantities fit within the parent quantity.
///
/// Submit-time check: violations are rejected, never auto-corrected.
///
/// # Errors
///
/// Returns an error if any lot quantity is non-positive or the sum exceeds
/// the parent quantity. An empty allocation is valid; lots are optional
/// unless tracking flags require them.
pub fn validate_allocations(parent_quantity: Decimal, lots: &[Lot]) -> Result<(), LotError> {
    let mut allocated = Decimal::ZERO;
    for lot in lots {
        if lot.quantity <= Decimal::ZERO {
            return Err(LotError::NonPositiveQuantity(lot.quantity));
        }
        allocated += lot.quantity;
    }

    if allocated > parent_quantity {
        return Err(LotError::AllocationExceedsParent { parent: parent_quantity, allocated });
    }

    Ok(())
}

/// Enforces the item's tracking requirements on an allocation.
///
/// For serial-tracked items every unit must carry its own distinct serial
/// entry of quantity one, covering the full parent quantity. A batch number
/// alone never satisfies serial tracking, even if the item is also
/// batch-tracked.
///
/// # Errors
///
/// Returns an error when a serial entry is missing, duplicated, holds more
/// than one unit, or the entries do not cover the parent quantity.
pub fn validate_tracking(
    tracking: TrackingFlags,
    parent_quantity: Decimal,
    lots: &[Lot],
) -> Result<(), LotError> {
    if !tracking.has_serial_tracking {
        return Ok(());
    }

    let mut seen = HashSet::new();
    let mut covered = Decimal::ZERO;
    for lot in lots {
        let Some(serial) = lot.serial_number.as_deref() else {
            return Err(LotError::SerialNumberRequired);
        };
        if !seen.insert(serial.to_string()) {
            return Err(LotError::DuplicateSerialNumber(serial.to_string()));
        }
        if lot.quantity != Decimal::ONE {
            return Err(LotError::SerialQuantityNotOne {
                serial: serial.to_string(),
                quantity: lot.quantity,
            });
        }
        covered += lot.quantity;
    }

    if covered != parent_quantity {
        return Err(LotError::SerialCoverageIncomplete { expected: parent_quantity, covered });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_clamp_trims_newest_entries_first() {
        let mut lots = vec![
            Lot::batch("B1", dec!(4)),
            Lot::batch("B2", dec!(4)),
            Lot::batch("B3", dec!(4)),
        ];
        let trimmed = clamp_allocations(dec!(10), &mut lots);
        assert_eq!(trimmed, dec!(2));
        assert_eq!(lots[0].quantity, dec!(4));
        assert_eq!(lots[1].quantity, dec!(4));
        assert_eq!(lots[2].quantity, dec!(2));
    }

    #[test]
    fn test_clamp_spans_multiple_entries() {
        let mut lots = vec![
            Lot::batch("B1", dec!(6)),
            Lot::batch("B2", dec!(3)),
            Lot::batch("B3", dec!(3)),
        ];
        let trimmed = clamp_allocations(dec!(5), &mut lots);
        assert_eq!(trimmed, dec!(7));
        assert_eq!(lots[0].quantity, dec!(5));
        assert_eq!(lots[1].quantity, dec!(0));
        assert_eq!(lots[2].quantity, dec!(0));
    }

    #[test]
    fn test_clamp_noop_when_within_parent() {
        let mut lots = vec![Lot::batch("B1", dec!(3)), Lot::batch("B2", dec!(2))];
        let trimmed = clamp_allocations(dec!(10), &mut lots);
        assert_eq!(trimmed, dec!(0));
        assert_eq!(lots[0].quantity, dec!(3));
        assert_eq!(lots[1].quantity, dec!(2));
    }

    #[test]
    fn test_validate_rejects_excess() {
        let lots = vec![Lot::batch("B1", dec!(7)), Lot::batch("B2", dec!(6))];
        assert!(matches!(
            validate_allocations(dec!(10), &lots),
            Err(LotError::AllocationExceedsParent { parent, allocated })
                if parent == dec!(10) && allocated == dec!(13)
        ));
    }

    #[test]
    fn test_validate_accepts_exact_and_under() {
        let lots = vec![Lot::batch("B1", dec!(4)), Lot::batch("B2", dec!(6))];
        assert!(validate_allocations(dec!(10), &lots).is_ok());
        assert!(validate_allocations(dec!(11), &lots).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity_lot() {
        let lots = vec![Lot::batch("B1", dec!(0))];
        assert!(matches!(
            validate_allocations(dec!(10), &lots),
            Err(LotError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_empty_allocation_is_valid() {
        assert!(validate_allocations(dec!(10), &[]).is_ok());
    }

    #[test]
    fn test_serial_tracking_requires_serials() {
        let tracking = TrackingFlags { has_batch_tracking: true, has_serial_tracking: true };
        // Batch alone is a hard error when serial tracking is active.
        let lots = vec![Lot::batch("B1", dec!(2))];
        assert!(matches!(
            validate_tracking(tracking, dec!(2), &lots),
            Err(LotError::SerialNumberRequired)
        ));
    }

    #[test]
    fn test_serial_tracking_full_coverage_ok() {
        let tracking = TrackingFlags { has_batch_tracking: false, has_serial_tracking: true };
        let lots = vec![Lot::serial("SN-1"), Lot::serial("SN-2")];
        assert!(validate_tracking(tracking, dec!(2), &lots).is_ok());
    }

    #[test]
    fn test_serial_tracking_duplicate_rejected() {
        let tracking = TrackingFlags { has_batch_tracking: false, has_serial_tracking: true };
        let lots = vec![Lot::serial("SN-1"), Lot::serial("SN-1")];
        assert!(matches!(
            validate_tracking(tracking, dec!(2), &lots),
            Err(LotError::DuplicateSerialNumber(serial)) if serial == "SN-1"
        ));
    }

    #[test]
    fn test_serial_tracking_incomplete_coverage_rejected() {
        let tracking = TrackingFlags { has_batch_tracking: false, has_serial_tracking: true };
        let lots = vec![Lot::serial("SN-1")];
        assert!(matches!(
            validate_tracking(tracking, dec!(3), &lots),
            Err(LotError::SerialCoverageIncomplete { expected, covered })
                if expected == dec!(3) && covered == dec!(1)
        ));
    }

    #[test]
    fn test_serial_quantity_must_be_one() {
        let tracking = TrackingFlags { has_batch_tracking: false, has_serial_tracking: true };
        let mut lot = Lot::serial("SN-1");
        lot.quantity = dec!(2);
        assert!(matches!(
            validate_tracking(tracking, dec!(2), &[lot]),
            Err(LotError::SerialQuantityNotOne { .. })
        ));
    }

    #[test]
    fn test_batch_only_tracking_skips_serial_rules() {
        let tracking = TrackingFlags { has_batch_tracking: true, has_serial_tracking: false };
        let lots = vec![Lot::batch("B1", dec!(5))];
        assert!(validate_tracking(tracking, dec!(5), &lots).is_ok());
    }
}
