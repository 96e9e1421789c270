//! Numeric error codes for the dining floor
//!
//! Error codes are organized by category:
//! - 0xxx: Operator input errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: Terminal and system errors

use std::fmt;

/// Error classification attached to log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Input ====================
    /// Command could not be parsed
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order item not found
    ItemNotFound = 4001,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Seat not found at table
    SeatNotFound = 7002,

    // ==================== 9xxx: System ====================
    /// Operation is not available in the active context
    InvalidContext = 9001,
    /// Configuration could not be loaded
    ConfigError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Short operator-facing description
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid command",
            ErrorCode::ItemNotFound => "Order item not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::SeatNotFound => "Seat not found",
            ErrorCode::InvalidContext => "Operation not available in the active context",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_sit_in_their_range() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::ItemNotFound.code() / 1000, 4);
        assert_eq!(ErrorCode::MenuItemNotFound.code() / 1000, 6);
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::SeatNotFound.code(), 7002);
        assert_eq!(ErrorCode::ConfigError.code(), 9002);
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(ErrorCode::InvalidContext.to_string(), "9001");
        assert_eq!(ErrorCode::ConfigError.message(), "Configuration error");
    }
}
