//! Shared types for the dining floor
//!
//! Types used across crates: error codes, the order item lifecycle,
//! and the menu / floor plan models.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::ErrorCode;
pub use models::{FloorPlan, MenuItem, MenuItemId};
pub use order::{ItemId, ItemStatus};
