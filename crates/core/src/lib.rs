//! Core business logic for Kirana.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `pricing` - Line amount and discount calculations
//! - `invoice` - Line items, line clubbing, and invoice totals
//! - `lots` - Batch/serial lot allocation and expiry classification
//! - `stock` - Stock level classification
//! - `purchase` - Purchase order approval/delivery workflow
//! - `grn` - Goods receipt note workflow
//! - `billing` - Billing draft/completion workflow

pub mod billing;
pub mod grn;
pub mod invoice;
pub mod lots;
pub mod pricing;
pub mod purchase;
pub mod stock;
