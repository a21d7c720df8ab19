//! Monetary rounding helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts flow through `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the given number of decimal places, half-up.
///
/// Retail invoices round half-up (0.5 paise rounds away from zero), unlike
/// the banker's rounding used for ledger allocation.
#[must_use]
pub fn round_half_up(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a grand total to the nearest whole rupee.
///
/// This is the payable figure printed on an invoice; the difference between
/// it and the exact total is the round-off.
#[must_use]
pub fn round_to_rupee(amount: Decimal) -> Decimal {
    round_half_up(amount, 0)
}
