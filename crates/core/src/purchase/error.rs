//! Purchase order workflow errors.

use kirana_shared::types::ActorRole;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{ApprovalStatus, DeliveryStatus};

/// Errors that can occur during purchase order workflow operations.
#[derive(Debug, Error)]
pub enum PurchaseOrderError {
    /// The approval decision has already been made.
    #[error("Approval already decided: {0}")]
    ApprovalAlreadyDecided(ApprovalStatus),

    /// Delivery requires a prior approval.
    #[error("Order must be APPROVED before delivery, approval status is {0}")]
    NotApproved(ApprovalStatus),

    /// Attempted an invalid delivery transition.
    #[error("Invalid delivery transition from {from} to {to}")]
    InvalidDeliveryTransition {
        /// The current delivery status.
        from: DeliveryStatus,
        /// The attempted target status.
        to: DeliveryStatus,
    },

    /// Completion requires no pending receipt quantity.
    #[error("Cannot complete order with pending quantity {0}")]
    PendingQuantityRemaining(Decimal),

    /// Line items can only be edited while approval is pending.
    #[error("Order is not editable, approval status is {0}")]
    NotEditable(ApprovalStatus),

    /// The acting role may not decide approvals.
    #[error("Role {0} is not permitted to decide approvals")]
    RoleNotPermitted(ActorRole),

    /// The persistence layer rejected or failed the call.
    #[error("Client error: {0}")]
    Client(String),
}

impl PurchaseOrderError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ApprovalAlreadyDecided(_) => "APPROVAL_ALREADY_DECIDED",
            Self::NotApproved(_) => "NOT_APPROVED",
            Self::InvalidDeliveryTransition { .. } => "INVALID_DELIVERY_TRANSITION",
            Self::PendingQuantityRemaining(_) => "PENDING_QUANTITY_REMAINING",
            Self::NotEditable(_) => "NOT_EDITABLE",
            Self::RoleNotPermitted(_) => "ROLE_NOT_PERMITTED",
            Self::Client(_) => "CLIENT_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::ApprovalAlreadyDecided(_)
            | Self::NotApproved(_)
            | Self::InvalidDeliveryTransition { .. }
            | Self::PendingQuantityRemaining(_)
            | Self::NotEditable(_) => 400,
            Self::RoleNotPermitted(_) => 403,
            Self::Client(_) => 502,
        }
    }
}
