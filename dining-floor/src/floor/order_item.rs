//! One line of a seat's order and its kitchen lifecycle

use shared::{ItemId, ItemStatus, MenuItem};

/// Ordered dish
///
/// Status only moves forward. A fresh item is `Unordered` (a pending
/// edit) until its order is placed.
#[derive(Debug, Clone)]
pub struct OrderItem {
    id: ItemId,
    details: MenuItem,
    status: ItemStatus,
}

impl OrderItem {
    pub fn new(details: MenuItem) -> Self {
        Self {
            id: ItemId::new(),
            details,
            status: ItemStatus::Unordered,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn details(&self) -> &MenuItem {
        &self.details
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    /// Raw lifecycle counter, used for button labels
    pub fn display_state(&self) -> u32 {
        self.status.code()
    }

    /// Commit a pending item. No-op once the item has been ordered.
    pub fn mark_as_ordered(&mut self) {
        if self.status == ItemStatus::Unordered {
            self.status = ItemStatus::Ordered;
        }
    }

    /// Move one stage forward, past Served too
    pub fn advance_state(&mut self) {
        self.status = self.status.advance();
    }

    pub fn has_been_ordered(&self) -> bool {
        self.status.is_ordered()
    }

    pub fn has_been_served(&self) -> bool {
        self.status.is_served()
    }

    pub fn can_be_cancelled(&self) -> bool {
        self.status.is_cancellable()
    }
}
