use shared::ErrorCode;
use shared::ItemId;
use thiserror::Error;

/// Floor errors
///
/// Every variant is a precondition violation: the caller addressed a table,
/// seat, dish or item that does not exist, or asked the active context for
/// an operation it does not offer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("Table not found: {0}")]
    TableNotFound(usize),

    #[error("Seat {seat} not found at table {table}")]
    SeatNotFound { table: usize, seat: usize },

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(usize),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("{operation} is not available in the {context} context")]
    InvalidContext {
        operation: &'static str,
        context: &'static str,
    },
}

impl FloorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FloorError::TableNotFound(_) => ErrorCode::TableNotFound,
            FloorError::SeatNotFound { .. } => ErrorCode::SeatNotFound,
            FloorError::MenuItemNotFound(_) => ErrorCode::MenuItemNotFound,
            FloorError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            FloorError::InvalidContext { .. } => ErrorCode::InvalidContext,
        }
    }
}

pub type FloorResult<T> = Result<T, FloorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(FloorError::TableNotFound(9).code(), ErrorCode::TableNotFound);
        assert_eq!(
            FloorError::SeatNotFound { table: 1, seat: 9 }.code(),
            ErrorCode::SeatNotFound
        );
        assert_eq!(
            FloorError::InvalidContext {
                operation: "done",
                context: "kitchen"
            }
            .code(),
            ErrorCode::InvalidContext
        );
    }

    #[test]
    fn test_messages() {
        let err = FloorError::SeatNotFound { table: 2, seat: 7 };
        assert_eq!(err.to_string(), "Seat 7 not found at table 2");

        let err = FloorError::InvalidContext {
            operation: "add_item",
            context: "restaurant",
        };
        assert_eq!(
            err.to_string(),
            "add_item is not available in the restaurant context"
        );
    }
}
