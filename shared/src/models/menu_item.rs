//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a dish in the menu catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub usize);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orderable dish (菜品). Immutable once the catalog is built.
///
/// Equality is catalog identity: two entries with the same name and price
/// at different positions are different dishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(id: MenuItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MenuItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_catalog_position() {
        let a = MenuItem::new(MenuItemId(0), "Soup", Decimal::new(450, 2));
        let b = MenuItem::new(MenuItemId(1), "Soup", Decimal::new(450, 2));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
