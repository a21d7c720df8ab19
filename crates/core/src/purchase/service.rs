//! Purchase order state transitions.

use kirana_shared::types::{ActorRole, PurchaseOrderId};
use rust_decimal::Decimal;
use tracing::info;

use super::error::PurchaseOrderError;
use super::types::{ApprovalStatus, DeliveryStatus, PurchaseOrder};

/// Stateless transition rules for the purchase order state machine.
///
/// All methods are pure functions of (state, role, requested transition);
/// they never touch the persistence layer.
pub struct PurchaseOrderWorkflow;

impl PurchaseOrderWorkflow {
    /// Approve a pending purchase order.
    ///
    /// # Errors
    ///
    /// Returns an error if the role may not decide approvals or the
    /// decision was already made.
    pub fn approve(
        current: ApprovalStatus,
        actor_role: ActorRole,
    ) -> Result<ApprovalStatus, PurchaseOrderError> {
        if !actor_role.can_decide_approvals() {
            return Err(PurchaseOrderError::RoleNotPermitted(actor_role));
        }
        match current {
            ApprovalStatus::Pending => Ok(ApprovalStatus::Approved),
            decided => Err(PurchaseOrderError::ApprovalAlreadyDecided(decided)),
        }
    }

    /// Reject a pending purchase order. Terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the role may not decide approvals or the
    /// decision was already made.
    pub fn reject(
        current: ApprovalStatus,
        actor_role: ActorRole,
    ) -> Result<ApprovalStatus, PurchaseOrderError> {
        if !actor_role.can_decide_approvals() {
            return Err(PurchaseOrderError::RoleNotPermitted(actor_role));
        }
        match current {
            ApprovalStatus::Pending => Ok(ApprovalStatus::Rejected),
            decided => Err(PurchaseOrderError::ApprovalAlreadyDecided(decided)),
        }
    }

    /// Mark an approved order delivered.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not approved or delivery is not
    /// pending.
    pub fn mark_delivered(
        approval: ApprovalStatus,
        delivery: DeliveryStatus,
    ) -> Result<DeliveryStatus, PurchaseOrderError> {
        if approval != ApprovalStatus::Approved {
            return Err(PurchaseOrderError::NotApproved(approval));
        }
        match delivery {
            DeliveryStatus::Pending => Ok(DeliveryStatus::Delivered),
            from => Err(PurchaseOrderError::InvalidDeliveryTransition {
                from,
                to: DeliveryStatus::Delivered,
            }),
        }
    }

    /// Complete a delivered order once goods receipt left no pending
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not delivered or any quantity is
    /// still pending.
    pub fn mark_completed(
        delivery: DeliveryStatus,
        pending_quantity: Decimal,
    ) -> Result<DeliveryStatus, PurchaseOrderError> {
        if delivery != DeliveryStatus::Delivered {
            return Err(PurchaseOrderError::InvalidDeliveryTransition {
                from: delivery,
                to: DeliveryStatus::Completed,
            });
        }
        if pending_quantity > Decimal::ZERO {
            return Err(PurchaseOrderError::PendingQuantityRemaining(pending_quantity));
        }
        Ok(DeliveryStatus::Completed)
    }

    /// Check that line items may still be edited.
    ///
    /// # Errors
    ///
    /// Returns an error once the approval decision has been made.
    pub fn ensure_editable(approval: ApprovalStatus) -> Result<(), PurchaseOrderError> {
        if approval == ApprovalStatus::Pending {
            Ok(())
        } else {
            Err(PurchaseOrderError::NotEditable(approval))
        }
    }
}

/// Client for the external purchase order persistence API.
///
/// Implemented by the HTTP layer; the core only issues the calls.
pub trait PurchaseOrderClient: Send + Sync {
    /// Persist a new approval status.
    fn update_approval_status(
        &self,
        id: PurchaseOrderId,
        status: ApprovalStatus,
    ) -> impl std::future::Future<Output = Result<(), PurchaseOrderError>> + Send;

    /// Persist a new delivery status.
    fn update_delivery_status(
        &self,
        id: PurchaseOrderId,
        status: DeliveryStatus,
    ) -> impl std::future::Future<Output = Result<(), PurchaseOrderError>> + Send;
}

/// Purchase order service: validates transitions, then persists them.
///
/// Workflow violations are rejected before any network call is made.
pub struct PurchaseOrderService<C: PurchaseOrderClient> {
    client: C,
}

impl<C: PurchaseOrderClient> PurchaseOrderService<C> {
    /// Creates a new service over a persistence client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Approve the order and persist the decision.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client error
    /// from the persistence layer. No retries are attempted.
    pub async fn approve(
        &self,
        order: &PurchaseOrder,
        actor_role: ActorRole,
    ) -> Result<ApprovalStatus, PurchaseOrderError> {
        let next = PurchaseOrderWorkflow::approve(order.approval_status, actor_role)?;
        self.client.update_approval_status(order.id, next).await?;
        info!(order_id = %order.id, status = %next, "purchase order approved");
        Ok(next)
    }

    /// Reject the order and persist the decision.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client error
    /// from the persistence layer.
    pub async fn reject(
        &self,
        order: &PurchaseOrder,
        actor_role: ActorRole,
    ) -> Result<ApprovalStatus, PurchaseOrderError> {
        let next = PurchaseOrderWorkflow::reject(order.approval_status, actor_role)?;
        self.client.update_approval_status(order.id, next).await?;
        info!(order_id = %order.id, status = %next, "purchase order rejected");
        Ok(next)
    }

    /// Mark the order delivered and persist the transition.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client error
    /// from the persistence layer.
    pub async fn mark_delivered(
        &self,
        order: &PurchaseOrder,
    ) -> Result<DeliveryStatus, PurchaseOrderError> {
        let next = PurchaseOrderWorkflow::mark_delivered(order.approval_status, order.status)?;
        self.client.update_delivery_status(order.id, next).await?;
        info!(order_id = %order.id, status = %next, "purchase order delivered");
        Ok(next)
    }

    /// Complete the order once nothing is pending, persisting the
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client error
    /// from the persistence layer.
    pub async fn mark_completed(
        &self,
        order: &PurchaseOrder,
        pending_quantity: Decimal,
    ) -> Result<DeliveryStatus, PurchaseOrderError> {
        let next = PurchaseOrderWorkflow::mark_completed(order.status, pending_quantity)?;
        self.client.update_delivery_status(order.id, next).await?;
        info!(order_id = %order.id, status = %next, "purchase order completed");
        Ok(next)
    }
}
