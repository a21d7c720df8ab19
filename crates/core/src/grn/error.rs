//! GRN workflow errors.

use kirana_shared::types::GrnId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::GrnStatus;
use crate::lots::LotError;
use crate::purchase::DeliveryStatus;

/// Errors that can occur during GRN workflow operations.
#[derive(Debug, Error)]
pub enum GrnError {
    /// A GRN can only be created against a delivered purchase order.
    #[error("Parent purchase order must be DELIVERED, got {0}")]
    ParentNotDelivered(DeliveryStatus),

    /// Received quantity cannot exceed the ordered quantity.
    #[error("Received quantity {received} exceeds ordered quantity {ordered}")]
    ReceivedExceedsOrdered {
        /// Quantity on the purchase order line.
        ordered: Decimal,
        /// Quantity entered as received.
        received: Decimal,
    },

    /// Lot allocation or tracking validation failed.
    #[error(transparent)]
    Lot(#[from] LotError),

    /// The GRN was already approved; approval is terminal.
    #[error("GRN is already approved")]
    AlreadyApproved,

    /// The operation requires a draft GRN.
    #[error("Operation requires a DRAFT GRN, status is {0}")]
    NotDraft(GrnStatus),

    /// Closing or splitting requires pending quantity.
    #[error("GRN has no pending quantity")]
    NoPendingQuantity,

    /// The first step of a two-step operation committed but a later step
    /// failed. The record may exist remotely in an intermediate state.
    #[error("Operation failed after GRN {grn_id} was persisted: {reason}")]
    PartialFailure {
        /// The GRN created by the committed step.
        grn_id: GrnId,
        /// Failure reported by the later step.
        reason: String,
    },

    /// The persistence layer rejected or failed the call.
    #[error("Client error: {0}")]
    Client(String),
}

impl GrnError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ParentNotDelivered(_) => "PARENT_NOT_DELIVERED",
            Self::ReceivedExceedsOrdered { .. } => "RECEIVED_EXCEEDS_ORDERED",
            Self::Lot(err) => err.error_code(),
            Self::AlreadyApproved => "ALREADY_APPROVED",
            Self::NotDraft(_) => "NOT_DRAFT",
            Self::NoPendingQuantity => "NO_PENDING_QUANTITY",
            Self::PartialFailure { .. } => "PARTIAL_FAILURE",
            Self::Client(_) => "CLIENT_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::ParentNotDelivered(_)
            | Self::ReceivedExceedsOrdered { .. }
            | Self::AlreadyApproved
            | Self::NotDraft(_)
            | Self::NoPendingQuantity => 400,
            Self::Lot(err) => err.http_status_code(),
            Self::PartialFailure { .. } | Self::Client(_) => 502,
        }
    }
}
