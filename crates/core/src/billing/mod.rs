//! Billing draft lifecycle.
//!
//! An invoice draft is owned by its creating session until persisted and
//! becomes read-only once its status leaves draft. Completion is the
//! update-then-complete two-step against the persistence API.

pub mod error;
pub mod service;
pub mod types;

pub use error::BillingError;
pub use service::{BillingClient, BillingService, BillingWorkflow, CompletedInvoice};
pub use types::{BillingStatus, InvoiceDraft, PaymentType};
