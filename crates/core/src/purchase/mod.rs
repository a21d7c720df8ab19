//! Purchase order workflow.
//!
//! A purchase order carries two independent lifecycle axes: the approval
//! decision and the physical delivery status. Transition legality is a pure
//! function of (state, acting role, requested transition).

pub mod error;
pub mod service;
pub mod types;

pub use error::PurchaseOrderError;
pub use service::{PurchaseOrderClient, PurchaseOrderService, PurchaseOrderWorkflow};
pub use types::{ApprovalStatus, DeliveryStatus, PurchaseOrder, PurchaseOrderLine};
