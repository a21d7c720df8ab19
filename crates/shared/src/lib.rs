//! Shared types, errors, and configuration for Kirana.
//!
//! This crate provides common types used across all other crates:
//! - Rounding helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Actor roles for explicit authorization checks
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
