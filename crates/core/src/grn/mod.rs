//! Goods receipt note workflow.
//!
//! A GRN records physically received quantities against a delivered
//! purchase order. Approving a GRN is the point at which its lots become
//! authoritative inventory; short receipts can instead close the parent
//! order or split its pending lines into a fresh order.

pub mod error;
pub mod service;
pub mod types;

pub use error::GrnError;
pub use service::{pending_lines, GrnClient, GrnService, GrnWorkflow};
pub use types::{Grn, GrnLine, GrnStatus};
