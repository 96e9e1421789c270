//! Dining table (桌台): fixed seats, one order per seat

use super::error::{FloorError, FloorResult};
use super::order::Order;

#[derive(Debug, Clone)]
pub struct Table {
    index: usize,
    location: String,
    orders: Vec<Order>,
}

impl Table {
    pub fn new(index: usize, seat_count: usize, location: impl Into<String>) -> Self {
        Self {
            index,
            location: location.into(),
            orders: (0..seat_count).map(|_| Order::new()).collect(),
        }
    }

    /// Position of the table in the restaurant
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn seat_count(&self) -> usize {
        self.orders.len()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_for(&self, seat: usize) -> FloorResult<&Order> {
        self.orders.get(seat).ok_or(FloorError::SeatNotFound {
            table: self.index,
            seat,
        })
    }

    pub fn order_for_mut(&mut self, seat: usize) -> FloorResult<&mut Order> {
        let table = self.index;
        self.orders
            .get_mut(seat)
            .ok_or(FloorError::SeatNotFound { table, seat })
    }

    /// Whether the seat has anything on its order, pending items included
    pub fn has_order_for(&self, seat: usize) -> FloorResult<bool> {
        self.order_for(seat).map(|order| !order.is_empty())
    }

    /// Some item has reached the kitchen and is not yet served
    pub fn has_any_active_orders(&self) -> bool {
        self.orders
            .iter()
            .flat_map(|order| order.items())
            .any(|item| item.has_been_ordered() && !item.has_been_served())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::{MenuItem, MenuItemId};

    fn dish() -> MenuItem {
        MenuItem::new(MenuItemId(0), "Bread", Decimal::new(450, 2))
    }

    #[test]
    fn test_one_order_per_seat() {
        let table = Table::new(3, 4, "Window");
        assert_eq!(table.index(), 3);
        assert_eq!(table.seat_count(), 4);
        assert_eq!(table.location(), "Window");
        assert!(table.orders().iter().all(Order::is_empty));
    }

    #[test]
    fn test_seat_lookup_is_bounds_checked() {
        let table = Table::new(1, 2, "Bar");
        assert!(table.order_for(1).is_ok());
        assert_eq!(
            table.order_for(2).unwrap_err(),
            FloorError::SeatNotFound { table: 1, seat: 2 }
        );
        assert!(table.has_order_for(5).is_err());
    }

    #[test]
    fn test_has_order_for() {
        let mut table = Table::new(0, 2, "Patio");
        table.order_for_mut(1).unwrap().add_item(&dish());
        assert!(!table.has_order_for(0).unwrap());
        assert!(table.has_order_for(1).unwrap());
    }

    #[test]
    fn test_active_orders_need_ordered_unserved_items() {
        let mut table = Table::new(0, 2, "Patio");
        assert!(!table.has_any_active_orders());

        let order = table.order_for_mut(0).unwrap();
        let id = order.add_item(&dish());
        assert!(!table.has_any_active_orders(), "pending items are not active");

        table.order_for_mut(0).unwrap().place_new_orders();
        assert!(table.has_any_active_orders());

        let item = table.order_for_mut(0).unwrap().item_mut(id).unwrap();
        for _ in 0..3 {
            item.advance_state();
        }
        assert!(item.has_been_served());
        assert!(!table.has_any_active_orders());
    }

    #[test]
    fn test_item_advanced_past_served_counts_as_active() {
        let mut table = Table::new(0, 1, "Patio");
        let order = table.order_for_mut(0).unwrap();
        let id = order.add_item(&dish());
        order.place_new_orders();
        let item = order.item_mut(id).unwrap();
        for _ in 0..4 {
            item.advance_state();
        }
        assert!(table.has_any_active_orders());
    }
}
