//! Line amount and discount calculations.
//!
//! Pure, deterministic functions that turn raw quantities, rates, and
//! discounts into taxable amounts, tax amounts, and line totals. These are
//! re-run whenever any input field changes, so they carry no state.

pub mod calc;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calc::{compute_line, discount_amount};
pub use error::PricingError;
pub use types::{BoxPackaging, Discount, DiscountKind, LineAmounts, LineInput, TaxRates};
