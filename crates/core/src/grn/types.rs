//! Goods receipt note types.

use chrono::{DateTime, Utc};
use kirana_shared::types::{GrnId, ItemId, PurchaseOrderId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::{Lot, TrackingFlags};

/// Lifecycle status of a GRN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrnStatus {
    /// Quantities and lots still being entered.
    Draft,
    /// Approved; lots are committed to inventory. Terminal.
    Approved,
}

impl std::fmt::Display for GrnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Approved => write!(f, "APPROVED"),
        }
    }
}

/// One received line of a GRN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrnLine {
    /// Item received.
    pub item_id: ItemId,
    /// Quantity on the purchase order line.
    pub original_quantity: Decimal,
    /// Quantity physically received.
    pub received_quantity: Decimal,
    /// Batch lots allocated against the received quantity.
    pub batch_details: Vec<Lot>,
    /// Serial lots allocated against the received quantity.
    pub serial_details: Vec<Lot>,
    /// Tracking requirements of the item.
    pub tracking: TrackingFlags,
}

impl GrnLine {
    /// Quantity still undelivered: `original - received`.
    #[must_use]
    pub fn pending_quantity(&self) -> Decimal {
        self.original_quantity - self.received_quantity
    }
}

/// A goods receipt note against one delivered purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grn {
    /// Unique identifier.
    pub id: GrnId,
    /// Purchase order this receipt is recorded against.
    pub purchase_order_id: PurchaseOrderId,
    /// Current status.
    pub status: GrnStatus,
    /// Received lines.
    pub lines: Vec<GrnLine>,
    /// User who recorded the receipt.
    pub created_by: UserId,
    /// When the GRN was created.
    pub created_at: DateTime<Utc>,
}

impl Grn {
    /// Creates a draft GRN.
    #[must_use]
    pub fn new(purchase_order_id: PurchaseOrderId, lines: Vec<GrnLine>, created_by: UserId) -> Self {
        Self {
            id: GrnId::new(),
            purchase_order_id,
            status: GrnStatus::Draft,
            lines,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Total quantity still undelivered across all lines.
    #[must_use]
    pub fn total_pending_quantity(&self) -> Decimal {
        self.lines.iter().map(GrnLine::pending_quantity).sum()
    }

    /// Returns true if any line has quantity still undelivered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.total_pending_quantity() > Decimal::ZERO
    }
}
