//! Actor roles for workflow authorization.
//!
//! Workflow operations take the acting role as an explicit parameter so
//! transition legality is a pure function of (state, role, transition),
//! never of ambient session state.

use serde::{Deserialize, Serialize};

/// Role of the user performing a workflow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// Full access, including approval decisions.
    Admin,
    /// Branch manager; may approve purchase orders and goods receipts.
    Manager,
    /// Distributor/sales user; creates drafts and completes billing.
    Distributor,
}

impl ActorRole {
    /// Returns true if this role may decide purchase order approvals.
    #[must_use]
    pub fn can_decide_approvals(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Distributor => write!(f, "distributor"),
        }
    }
}
