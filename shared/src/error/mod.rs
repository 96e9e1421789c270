//! Error codes shared by the dining floor crates
//!
//! # Error Code Ranges
//!
//! - 0xxx: Operator input errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: Terminal and system errors

mod codes;

pub use codes::ErrorCode;
