//! Billing draft types.

use chrono::{DateTime, Utc};
use kirana_shared::types::{CustomerId, InvoiceId, UserId};
use serde::{Deserialize, Serialize};

use crate::invoice::{club_line, ClubOutcome, InvoiceTotals, LineItem};
use crate::pricing::Discount;

use super::error::BillingError;

/// Lifecycle status of a billing draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    /// Being edited; the only mutable state.
    Draft,
    /// Passed admin review; read-only. Used by some listing flows and not
    /// equivalent to completed.
    Approved,
    /// Completed with an invoice number issued. Terminal.
    Completed,
}

impl std::fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Approved => write!(f, "approved"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Cash on completion.
    Cash,
    /// Online transfer/UPI.
    Online,
    /// On credit against the customer's account.
    Credit,
}

/// A billing invoice draft: an ordered cart plus invoice-level settings.
///
/// Line order is irrelevant to totals. All mutating methods check the
/// draft status first, so workflow violations surface before any
/// persistence call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Customer being billed.
    pub customer_id: CustomerId,
    /// Cart lines.
    pub lines: Vec<LineItem>,
    /// Discount applied once to the summed subtotal.
    pub overall_discount: Discount,
    /// Current status.
    pub status: BillingStatus,
    /// Payment type.
    pub payment_type: PaymentType,
    /// User who created the draft.
    pub created_by: UserId,
    /// When the draft was created.
    pub created_at: DateTime<Utc>,
    /// When the draft was last updated.
    pub updated_at: DateTime<Utc>,
}

impl InvoiceDraft {
    /// Creates an empty draft for a customer.
    #[must_use]
    pub fn new(customer_id: CustomerId, payment_type: PaymentType, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new(),
            customer_id,
            lines: Vec::new(),
            overall_discount: Discount::none(),
            status: BillingStatus::Draft,
            payment_type,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the draft may still be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status == BillingStatus::Draft
    }

    fn ensure_editable(&self) -> Result<(), BillingError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(BillingError::NotEditable(self.status))
        }
    }

    /// Adds a finalized line, clubbing it into a matching cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is not editable or the merged line
    /// fails pricing validation.
    pub fn add_line(&mut self, line: LineItem) -> Result<ClubOutcome, BillingError> {
        self.ensure_editable()?;
        let outcome = club_line(&mut self.lines, line)?;
        self.updated_at = Utc::now();
        Ok(outcome)
    }

    /// Removes the line at `index`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is not editable.
    pub fn remove_line(&mut self, index: usize) -> Result<(), BillingError> {
        self.ensure_editable()?;
        if index < self.lines.len() {
            self.lines.remove(index);
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    /// Sets the invoice-level discount.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is not editable.
    pub fn set_overall_discount(&mut self, discount: Discount) -> Result<(), BillingError> {
        self.ensure_editable()?;
        self.overall_discount = discount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Changes the billed customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is not editable.
    pub fn set_customer(&mut self, customer_id: CustomerId) -> Result<(), BillingError> {
        self.ensure_editable()?;
        self.customer_id = customer_id;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Changes the payment type.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is not editable.
    pub fn set_payment_type(&mut self, payment_type: PaymentType) -> Result<(), BillingError> {
        self.ensure_editable()?;
        self.payment_type = payment_type;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Aggregated totals for the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the overall discount fails validation against
    /// the current subtotal.
    pub fn totals(&self) -> Result<InvoiceTotals, BillingError> {
        Ok(InvoiceTotals::compute(&self.lines, self.overall_discount)?)
    }
}
