//! Purchase order types.

use chrono::{DateTime, Utc};
use kirana_shared::types::{ItemId, PurchaseOrderId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval decision on a purchase order.
///
/// Terminal once decided: there is no un-approve or un-reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalStatus {
    /// Awaiting an approval decision.
    Pending,
    /// Approved for delivery.
    Approved,
    /// Rejected; the order goes no further.
    Rejected,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Physical fulfillment status of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryStatus {
    /// Goods not yet delivered.
    Pending,
    /// Goods delivered; goods receipt can begin.
    Delivered,
    /// All received quantities accounted for, nothing pending.
    Completed,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Delivered => write!(f, "DELIVERED"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// A line on a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    /// Item ordered.
    pub item_id: ItemId,
    /// Quantity ordered.
    pub quantity: Decimal,
}

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Unique identifier.
    pub id: PurchaseOrderId,
    /// Ordered line items.
    pub lines: Vec<PurchaseOrderLine>,
    /// Approval axis.
    pub approval_status: ApprovalStatus,
    /// Delivery axis.
    pub status: DeliveryStatus,
    /// User who created the order.
    pub created_by: UserId,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Creates a new pending purchase order.
    #[must_use]
    pub fn new(lines: Vec<PurchaseOrderLine>, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: PurchaseOrderId::new(),
            lines,
            approval_status: ApprovalStatus::Pending,
            status: DeliveryStatus::Pending,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if line items may still be edited.
    ///
    /// Edits are only permitted before the approval decision.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }

    /// Returns true if the order can be marked delivered.
    #[must_use]
    pub fn can_mark_delivered(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
            && self.status == DeliveryStatus::Pending
    }
}
