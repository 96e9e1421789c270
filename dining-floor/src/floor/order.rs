//! One seat's order
//!
//! Items keep insertion order (oldest first). Items still `Unordered` form
//! the pending edit session: [`Order::place_new_orders`] commits them,
//! [`Order::remove_unordered_items`] rolls them back.

use super::error::{FloorError, FloorResult};
use super::order_item::OrderItem;
use rust_decimal::Decimal;
use shared::{ItemId, MenuItem};

#[derive(Debug, Clone, Default)]
pub struct Order {
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    /// Append a pending item. Never deduplicates.
    pub fn add_item(&mut self, menu_item: &MenuItem) -> ItemId {
        let item = OrderItem::new(menu_item.clone());
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Remove an item by identity
    pub fn remove_item(&mut self, id: ItemId) -> FloorResult<OrderItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(FloorError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Pending items, in order
    pub fn unordered_items(&self) -> impl Iterator<Item = &OrderItem> {
        self.items.iter().filter(|i| !i.has_been_ordered())
    }

    /// Commit every pending item. Returns how many were committed.
    pub fn place_new_orders(&mut self) -> usize {
        let mut placed = 0;
        for item in self.items.iter_mut().filter(|i| !i.has_been_ordered()) {
            item.mark_as_ordered();
            placed += 1;
        }
        placed
    }

    /// Discard every pending item. Returns how many were discarded.
    pub fn remove_unordered_items(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| i.has_been_ordered());
        before - self.items.len()
    }

    /// Sum of all item prices, pending ones included
    pub fn total_cost(&self) -> Decimal {
        self.items.iter().map(|i| i.details().price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ItemStatus, MenuItemId};

    fn dish(id: usize, cents: i64) -> MenuItem {
        MenuItem::new(MenuItemId(id), format!("Dish {}", id), Decimal::new(cents, 2))
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_add_item_appends_pending() {
        let mut order = Order::new();
        let soup = dish(0, 650);
        let first = order.add_item(&soup);
        let second = order.add_item(&soup);

        assert_eq!(order.len(), 2);
        assert_ne!(first, second);
        assert_eq!(order.items()[0].id(), first);
        assert_eq!(order.items()[1].id(), second);
        assert_eq!(order.unordered_items().count(), 2);
    }

    #[test]
    fn test_total_cost_includes_pending() {
        let mut order = Order::new();
        order.add_item(&dish(0, 650));
        order.add_item(&dish(1, 1250));
        order.place_new_orders();
        order.add_item(&dish(2, 100));
        assert_eq!(order.total_cost(), Decimal::new(2000, 2));
    }

    #[test]
    fn test_remove_item_by_identity() {
        let mut order = Order::new();
        let a = order.add_item(&dish(0, 100));
        let b = order.add_item(&dish(0, 100));

        let removed = order.remove_item(a).unwrap();
        assert_eq!(removed.id(), a);
        assert_eq!(order.len(), 1);
        assert_eq!(order.items()[0].id(), b);
    }

    #[test]
    fn test_remove_missing_item_fails() {
        let mut order = Order::new();
        order.add_item(&dish(0, 100));
        let stranger = ItemId::new();
        assert_eq!(
            order.remove_item(stranger).unwrap_err(),
            FloorError::ItemNotFound(stranger)
        );
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_place_new_orders_is_idempotent() {
        let mut order = Order::new();
        order.add_item(&dish(0, 100));
        order.add_item(&dish(1, 200));

        assert_eq!(order.place_new_orders(), 2);
        let first: Vec<_> = order.items().iter().map(|i| (i.id(), i.status())).collect();

        assert_eq!(order.place_new_orders(), 0);
        let second: Vec<_> = order.items().iter().map(|i| (i.id(), i.status())).collect();
        assert_eq!(first, second);
        assert!(order.items().iter().all(|i| i.status() == ItemStatus::Ordered));
    }

    #[test]
    fn test_place_new_orders_leaves_kitchen_progress_alone() {
        let mut order = Order::new();
        let cooking = order.add_item(&dish(0, 100));
        order.place_new_orders();
        order.item_mut(cooking).unwrap().advance_state();

        order.add_item(&dish(1, 100));
        order.place_new_orders();
        assert_eq!(order.item(cooking).unwrap().status(), ItemStatus::Cooking);
    }

    #[test]
    fn test_remove_unordered_items_keeps_ordered() {
        let mut order = Order::new();
        let kept_a = order.add_item(&dish(0, 100));
        order.place_new_orders();
        order.add_item(&dish(1, 100));
        let kept_b = order.add_item(&dish(2, 100));
        order.item_mut(kept_b).unwrap().mark_as_ordered();
        order.add_item(&dish(3, 100));

        assert_eq!(order.remove_unordered_items(), 2);
        let ids: Vec<_> = order.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![kept_a, kept_b]);
    }
}
