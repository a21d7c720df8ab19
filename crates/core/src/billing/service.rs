//! Billing transitions and the update-then-complete flow.

use kirana_shared::types::{InvoiceId, ItemId};
use tracing::{info, warn};

use super::error::BillingError;
use super::types::{BillingStatus, InvoiceDraft};
use crate::lots::Lot;

/// Stateless transition rules for the billing state machine.
pub struct BillingWorkflow;

impl BillingWorkflow {
    /// Complete a draft, making it read-only with an invoice number.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyCompleted` for a repeat completion and
    /// `InvalidTransition` from any other non-draft state.
    pub fn complete(current: BillingStatus) -> Result<BillingStatus, BillingError> {
        match current {
            BillingStatus::Draft => Ok(BillingStatus::Completed),
            BillingStatus::Completed => Err(BillingError::AlreadyCompleted),
            from => Err(BillingError::InvalidTransition { from, to: BillingStatus::Completed }),
        }
    }

    /// Move a draft to the review-only approved state.
    ///
    /// Not equivalent to completion: no invoice number is issued.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` from any non-draft state.
    pub fn approve(current: BillingStatus) -> Result<BillingStatus, BillingError> {
        match current {
            BillingStatus::Draft => Ok(BillingStatus::Approved),
            from => Err(BillingError::InvalidTransition { from, to: BillingStatus::Approved }),
        }
    }
}

/// A completed invoice as returned by the persistence API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedInvoice {
    /// The invoice identifier.
    pub invoice_id: InvoiceId,
    /// The issued invoice number.
    pub invoice_no: String,
}

/// Client for the external billing persistence API.
pub trait BillingClient: Send + Sync {
    /// Persist a new draft, returning its remote identifier.
    fn persist_invoice(
        &self,
        draft: &InvoiceDraft,
    ) -> impl std::future::Future<Output = Result<InvoiceId, BillingError>> + Send;

    /// Push the latest draft state.
    fn update_invoice(
        &self,
        id: InvoiceId,
        draft: &InvoiceDraft,
    ) -> impl std::future::Future<Output = Result<(), BillingError>> + Send;

    /// Complete the invoice, which issues the invoice number.
    fn complete_invoice(
        &self,
        id: InvoiceId,
    ) -> impl std::future::Future<Output = Result<String, BillingError>> + Send;

    /// Available batch/serial stock for an item. An empty result is a
    /// valid state, not an error.
    fn fetch_lots(
        &self,
        item_id: ItemId,
    ) -> impl std::future::Future<Output = Result<Vec<Lot>, BillingError>> + Send;
}

/// Billing service: validates locally, then drives the persistence client.
///
/// Completion is two sequential dependent calls (update, then complete).
/// A single retry-free attempt is made; if completion fails after the
/// update committed, the failure is surfaced as partial, never rolled
/// back or retried.
pub struct BillingService<C: BillingClient> {
    client: C,
}

impl<C: BillingClient> BillingService<C> {
    /// Creates a new service over a persistence client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Persist a draft for later editing.
    ///
    /// # Errors
    ///
    /// Returns a workflow error before any network call, or a client
    /// error.
    pub async fn save_draft(&self, draft: &InvoiceDraft) -> Result<InvoiceId, BillingError> {
        if !draft.is_editable() {
            return Err(BillingError::NotEditable(draft.status));
        }
        // Surface totals errors (e.g. overall discount out of range) here
        // rather than letting the backend discover them.
        draft.totals()?;
        let id = self.client.persist_invoice(draft).await?;
        info!(invoice_id = %id, "billing draft saved");
        Ok(id)
    }

    /// Complete a draft: push the latest edits, then complete.
    ///
    /// # Errors
    ///
    /// Workflow and totals errors are returned before any network call.
    /// If the completion step fails after the update committed, the error
    /// is `PartialFailure` carrying the invoice id.
    pub async fn complete(&self, draft: &InvoiceDraft) -> Result<CompletedInvoice, BillingError> {
        BillingWorkflow::complete(draft.status)?;
        draft.totals()?;

        self.client.update_invoice(draft.id, draft).await?;

        match self.client.complete_invoice(draft.id).await {
            Ok(invoice_no) => {
                info!(invoice_id = %draft.id, invoice_no = %invoice_no, "billing completed");
                Ok(CompletedInvoice { invoice_id: draft.id, invoice_no })
            }
            Err(err) => {
                warn!(invoice_id = %draft.id, error = %err, "complete failed after update");
                Err(BillingError::PartialFailure {
                    invoice_id: draft.id,
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Available lots for an item's lot picker.
    ///
    /// # Errors
    ///
    /// Returns a client error; an empty list is a valid result.
    pub async fn available_lots(&self, item_id: ItemId) -> Result<Vec<Lot>, BillingError> {
        self.client.fetch_lots(item_id).await
    }
}
