//! GRN validation, approval, and the short-receipt terminals.

use kirana_shared::types::{GrnId, PurchaseOrderId};
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::error::GrnError;
use super::types::{Grn, GrnLine, GrnStatus};
use crate::lots::{validate_allocations, validate_tracking};
use crate::purchase::{DeliveryStatus, PurchaseOrderLine};

/// Stateless validation and transition rules for GRNs.
pub struct GrnWorkflow;

impl GrnWorkflow {
    /// Validates a draft GRN line: received within ordered, lot
    /// allocations within received, tracking requirements met.
    ///
    /// Submit-time check; nothing is auto-corrected here.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate_line(line: &GrnLine) -> Result<(), GrnError> {
        if line.received_quantity > line.original_quantity {
            return Err(GrnError::ReceivedExceedsOrdered {
                ordered: line.original_quantity,
                received: line.received_quantity,
            });
        }

        validate_allocations(line.received_quantity, &line.batch_details)?;
        validate_allocations(line.received_quantity, &line.serial_details)?;
        validate_tracking(line.tracking, line.received_quantity, &line.serial_details)?;
        Ok(())
    }

    /// Validates a whole draft GRN against its parent order's delivery
    /// status.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent is not delivered or any line fails
    /// validation.
    pub fn validate_draft(grn: &Grn, parent_status: DeliveryStatus) -> Result<(), GrnError> {
        if parent_status != DeliveryStatus::Delivered {
            return Err(GrnError::ParentNotDelivered(parent_status));
        }
        for line in &grn.lines {
            Self::validate_line(line)?;
        }
        Ok(())
    }

    /// Approve a draft GRN. Terminal, and rejected if already approved.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyApproved` for a second approval attempt.
    pub fn approve(current: GrnStatus) -> Result<GrnStatus, GrnError> {
        match current {
            GrnStatus::Draft => Ok(GrnStatus::Approved),
            GrnStatus::Approved => Err(GrnError::AlreadyApproved),
        }
    }

    /// Checks that a short-receipt terminal (close or split) applies:
    /// the GRN must be a draft with pending quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the GRN is not a draft or nothing is pending.
    pub fn ensure_short_receipt(grn: &Grn) -> Result<(), GrnError> {
        if grn.status != GrnStatus::Draft {
            return Err(GrnError::NotDraft(grn.status));
        }
        if !grn.has_pending() {
            return Err(GrnError::NoPendingQuantity);
        }
        Ok(())
    }
}

/// The still-pending line items of a GRN, as purchase order lines for a
/// split order.
///
/// Fully received lines are dropped; the original order's lines are never
/// touched.
#[must_use]
pub fn pending_lines(grn: &Grn) -> Vec<PurchaseOrderLine> {
    grn.lines
        .iter()
        .filter(|line| line.pending_quantity() > Decimal::ZERO)
        .map(|line| PurchaseOrderLine {
            item_id: line.item_id,
            quantity: line.pending_quantity(),
        })
        .collect()
}

/// Client for the external GRN/purchase-order persistence API.
pub trait GrnClient: Send + Sync {
    /// Persist a draft GRN, returning its remote identifier.
    fn persist_grn(&self, grn: &Grn)
        -> impl std::future::Future<Output = Result<GrnId, GrnError>> + Send;

    /// Approve a persisted GRN, committing its lots into inventory.
    fn approve_grn(&self, id: GrnId)
        -> impl std::future::Future<Output = Result<(), GrnError>> + Send;

    /// Close the parent purchase order, accepting the shortfall.
    fn close_purchase_order(
        &self,
        id: PurchaseOrderId,
    ) -> impl std::future::Future<Output = Result<(), GrnError>> + Send;

    /// Split the still-pending lines into a new purchase order.
    fn split_purchase_order(
        &self,
        id: PurchaseOrderId,
        pending: Vec<PurchaseOrderLine>,
    ) -> impl std::future::Future<Output = Result<PurchaseOrderId, GrnError>> + Send;
}

/// GRN service: validates, then drives the persistence client.
///
/// The create-then-approve flow issues two sequential dependent calls; a
/// rejection of the second call fails the whole operation without retry
/// and without rolling back the first.
pub struct GrnService<C: GrnClient> {
    client: C,
}

impl<C: GrnClient> GrnService<C> {
    /// Creates a new service over a persistence client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Persist a draft GRN and approve it in one logical operation.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any network call. If the
    /// approve step fails after the GRN was persisted, the error is
    /// `PartialFailure` carrying the persisted id; the remote draft is NOT
    /// deleted or retried.
    pub async fn create_and_approve(
        &self,
        grn: &Grn,
        parent_status: DeliveryStatus,
    ) -> Result<GrnId, GrnError> {
        GrnWorkflow::validate_draft(grn, parent_status)?;
        GrnWorkflow::approve(grn.status)?;

        let grn_id = self.client.persist_grn(grn).await?;

        if let Err(err) = self.client.approve_grn(grn_id).await {
            warn!(grn_id = %grn_id, error = %err, "approve failed after GRN was persisted");
            return Err(GrnError::PartialFailure { grn_id, reason: err.to_string() });
        }

        info!(grn_id = %grn_id, po_id = %grn.purchase_order_id, "GRN approved");
        Ok(grn_id)
    }

    /// Close the parent purchase order, permanently accepting the
    /// shortfall.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client
    /// error.
    pub async fn close_short(&self, grn: &Grn) -> Result<(), GrnError> {
        GrnWorkflow::ensure_short_receipt(grn)?;
        self.client.close_purchase_order(grn.purchase_order_id).await?;
        info!(po_id = %grn.purchase_order_id, "purchase order closed short");
        Ok(())
    }

    /// Split the still-pending lines into a new purchase order, leaving
    /// the original satisfied for what was received.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client
    /// error.
    pub async fn split_pending(&self, grn: &Grn) -> Result<PurchaseOrderId, GrnError> {
        GrnWorkflow::ensure_short_receipt(grn)?;
        let pending = pending_lines(grn);
        let new_po = self
            .client
            .split_purchase_order(grn.purchase_order_id, pending)
            .await?;
        info!(po_id = %grn.purchase_order_id, new_po_id = %new_po, "purchase order split");
        Ok(new_po)
    }
}
