//! Batch/serial lot handling.
//!
//! A lot is a batch- or serial-tracked sub-quantity of an item with its own
//! identity and expiry. Allocation of lots against a parent quantity is
//! clamped interactively and hard-validated at submit time.

pub mod allocation;
pub mod error;
pub mod expiry;
pub mod types;

#[cfg(test)]
mod props;

pub use allocation::{clamp_allocations, validate_allocations, validate_tracking};
pub use error::LotError;
pub use expiry::classify_expiry;
pub use types::{ExpiryStatus, Lot, LotIdentity, TrackingFlags};
