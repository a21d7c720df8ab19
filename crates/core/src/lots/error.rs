//! Lot validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during lot allocation and tracking validation.
#[derive(Debug, Error)]
pub enum LotError {
    /// Allocated lot quantities exceed the parent quantity.
    #[error("Allocated lot quantity {allocated} exceeds parent quantity {parent}")]
    AllocationExceedsParent {
        /// Parent quantity being allocated against.
        parent: Decimal,
        /// Sum of lot quantities.
        allocated: Decimal,
    },

    /// Lot quantity must be positive.
    #[error("Lot quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    /// A serial-tracked item requires a serial number on every unit.
    ///
    /// A batch number alone is insufficient even when the item is also
    /// batch-tracked.
    #[error("Serial-tracked item requires a serial number on every lot entry")]
    SerialNumberRequired,

    /// Serial numbers must be distinct within an allocation.
    #[error("Duplicate serial number: {0}")]
    DuplicateSerialNumber(String),

    /// A serial lot entry must hold exactly one unit.
    #[error("Serial lot {serial} must hold quantity 1, got {quantity}")]
    SerialQuantityNotOne {
        /// Offending serial number.
        serial: String,
        /// Quantity found on the entry.
        quantity: Decimal,
    },

    /// Serial entries do not cover every unit of the parent quantity.
    #[error("Serial entries cover {covered} of {expected} units")]
    SerialCoverageIncomplete {
        /// Units requiring a serial.
        expected: Decimal,
        /// Units actually covered.
        covered: Decimal,
    },
}

impl LotError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AllocationExceedsParent { .. } => "ALLOCATION_EXCEEDS_PARENT",
            Self::NonPositiveQuantity(_) => "NON_POSITIVE_QUANTITY",
            Self::SerialNumberRequired => "SERIAL_NUMBER_REQUIRED",
            Self::DuplicateSerialNumber(_) => "DUPLICATE_SERIAL_NUMBER",
            Self::SerialQuantityNotOne { .. } => "SERIAL_QUANTITY_NOT_ONE",
            Self::SerialCoverageIncomplete { .. } => "SERIAL_COVERAGE_INCOMPLETE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::AllocationExceedsParent { .. } | Self::SerialCoverageIncomplete { .. } => 422,
            Self::NonPositiveQuantity(_)
            | Self::SerialNumberRequired
            | Self::DuplicateSerialNumber(_)
            | Self::SerialQuantityNotOne { .. } => 400,
        }
    }
}
