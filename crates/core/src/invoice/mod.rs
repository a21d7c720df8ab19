//! Invoice cart mathematics.
//!
//! Line items with derived amounts, duplicate-line clubbing, and invoice
//! totals aggregation. All recomputation is explicit: mutate, then call
//! back into these functions. No hidden reactive graphs.

pub mod clubbing;
pub mod totals;
pub mod types;

#[cfg(test)]
mod props;

pub use clubbing::{club_line, ClubOutcome};
pub use totals::{DiscountAdjustedTax, InvoiceTotals};
pub use types::LineItem;
