//! Billing workflow errors.

use kirana_shared::types::InvoiceId;
use thiserror::Error;

use super::types::BillingStatus;
use crate::pricing::PricingError;

/// Errors that can occur during billing operations.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The draft has left the editable state.
    #[error("Billing is not editable, status is {0}")]
    NotEditable(BillingStatus),

    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: BillingStatus,
        /// The attempted target status.
        to: BillingStatus,
    },

    /// A completed billing cannot be completed again.
    #[error("Billing is already completed")]
    AlreadyCompleted,

    /// Line or totals computation failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The draft update committed but completion failed. The remote draft
    /// reflects the latest edits without an invoice number.
    #[error("Completion failed after invoice {invoice_id} was updated: {reason}")]
    PartialFailure {
        /// The invoice whose update committed.
        invoice_id: InvoiceId,
        /// Failure reported by the completion step.
        reason: String,
    },

    /// The persistence layer rejected or failed the call.
    #[error("Client error: {0}")]
    Client(String),
}

impl BillingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotEditable(_) => "NOT_EDITABLE",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::AlreadyCompleted => "ALREADY_COMPLETED",
            Self::Pricing(err) => err.error_code(),
            Self::PartialFailure { .. } => "PARTIAL_FAILURE",
            Self::Client(_) => "CLIENT_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NotEditable(_) | Self::InvalidTransition { .. } | Self::AlreadyCompleted => 400,
            Self::Pricing(err) => err.http_status_code(),
            Self::PartialFailure { .. } | Self::Client(_) => 502,
        }
    }
}
