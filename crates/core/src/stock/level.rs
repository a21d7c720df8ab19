//! Stock level derivation from quantity and reorder level.

use kirana_shared::types::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock level of an inventory item.
///
/// Stored as a cached label on the item record (rather than derived on
/// every read) so list views can filter by level in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Quantity is above the reorder level.
    InStock,
    /// Quantity is positive but at or below the reorder level.
    LowStock,
    /// Quantity is zero or negative.
    OutOfStock,
}

/// Derives the stock level for a quantity against a reorder level.
#[must_use]
pub fn classify_stock(quantity: Decimal, reorder_level: Decimal) -> StockLevel {
    if quantity <= Decimal::ZERO {
        StockLevel::OutOfStock
    } else if quantity <= reorder_level {
        StockLevel::LowStock
    } else {
        StockLevel::InStock
    }
}

/// An inventory item with its cached stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Item this stock record belongs to.
    pub item_id: ItemId,
    /// Quantity on hand.
    pub quantity: Decimal,
    /// Reorder threshold.
    pub reorder_level: Decimal,
    /// Cached level, re-derived on every quantity mutation.
    pub level: StockLevel,
}

impl StockItem {
    /// Creates a stock record with the level derived from its quantity.
    #[must_use]
    pub fn new(item_id: ItemId, quantity: Decimal, reorder_level: Decimal) -> Self {
        Self {
            item_id,
            quantity,
            reorder_level,
            level: classify_stock(quantity, reorder_level),
        }
    }

    /// Applies a stock movement (receipt, sale, adjustment) and re-derives
    /// the cached level.
    pub fn apply_movement(&mut self, delta: Decimal) {
        self.quantity += delta;
        self.level = classify_stock(self.quantity, self.reorder_level);
    }
}
