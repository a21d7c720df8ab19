//! Stock level classification.

pub mod level;

pub use level::{classify_stock, StockItem, StockLevel};
