//! Lot domain types.

use chrono::NaiveDate;
use kirana_shared::types::LotId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expiry classification of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiry date is in the past.
    Expired,
    /// Expiry date falls within the configured horizon.
    ExpiringSoon,
    /// Expiry date is beyond the horizon.
    Valid,
    /// The lot carries no expiry date.
    NotTracked,
}

/// Batch/serial identity attached to an invoice or receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LotIdentity {
    /// Batch number, for batch-tracked items.
    pub batch_number: Option<String>,
    /// Serial number, for serial-tracked items.
    pub serial_number: Option<String>,
    /// Expiry date, if the lot is expiry-tracked.
    pub expiry_date: Option<NaiveDate>,
}

/// A batch- or serial-tracked sub-quantity of an item.
///
/// Lots are created when goods are received or stocked, never mutated after
/// the owning record is approved, and deleted only with their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    /// Unique identifier.
    pub id: LotId,
    /// Batch number, for batch-tracked items.
    pub batch_number: Option<String>,
    /// Serial number, for serial-tracked items.
    pub serial_number: Option<String>,
    /// Quantity held by this lot.
    pub quantity: Decimal,
    /// Expiry date, if tracked.
    pub expiry_date: Option<NaiveDate>,
    /// Cached expiry classification.
    pub expiry_status: ExpiryStatus,
}

impl Lot {
    /// Creates a batch lot with the given quantity.
    #[must_use]
    pub fn batch(batch_number: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id: LotId::new(),
            batch_number: Some(batch_number.into()),
            serial_number: None,
            quantity,
            expiry_date: None,
            expiry_status: ExpiryStatus::NotTracked,
        }
    }

    /// Creates a serial lot; serial units always carry quantity one.
    #[must_use]
    pub fn serial(serial_number: impl Into<String>) -> Self {
        Self {
            id: LotId::new(),
            batch_number: None,
            serial_number: Some(serial_number.into()),
            quantity: Decimal::ONE,
            expiry_date: None,
            expiry_status: ExpiryStatus::NotTracked,
        }
    }

    /// Attaches an expiry date, leaving the cached status untouched until
    /// the next classification pass.
    #[must_use]
    pub fn with_expiry(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }
}

/// Which identity kinds an item requires on its lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackingFlags {
    /// Item is batch-tracked.
    pub has_batch_tracking: bool,
    /// Item is serial-tracked; every unit needs a distinct serial.
    pub has_serial_tracking: bool,
}
