//! Common types used across the application.

pub mod id;
pub mod money;
pub mod role;

pub use id::*;
pub use money::{round_half_up, round_to_rupee};
pub use role::ActorRole;
