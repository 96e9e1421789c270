//! Order item lifecycle types
//!
//! - [`ItemStatus`]: the kitchen lifecycle of one ordered dish
//! - [`ItemId`]: identity of one ordered dish

pub mod types;

// Re-exports
pub use types::*;
