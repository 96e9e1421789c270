//! Restaurant - tables, menu catalog and change observers
//!
//! The restaurant never knows who is watching it. Observers are registered
//! once by the composing application and receive a zero-argument change
//! notification after every completed mutation, in registration order.

use super::error::{FloorError, FloorResult};
use super::order_item::OrderItem;
use super::table::Table;
use shared::models::{FloorPlan, TableSpec};
use shared::{ItemId, MenuItem, MenuItemId};
use std::fmt;
use std::sync::Arc;

/// Receives "state changed, redraw" notifications
pub trait RestaurantObserver: Send + Sync {
    fn on_restaurant_changed(&self);
}

/// Position of an order item on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemLocation {
    pub table: usize,
    pub seat: usize,
}

/// Kitchen board row: an ordered item that is not yet served
#[derive(Debug, Clone, Copy)]
pub struct ActiveItem<'a> {
    pub location: ItemLocation,
    pub item: &'a OrderItem,
}

pub struct Restaurant {
    tables: Vec<Table>,
    menu: Vec<MenuItem>,
    observers: Vec<Arc<dyn RestaurantObserver>>,
}

impl fmt::Debug for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restaurant")
            .field("tables", &self.tables.len())
            .field("menu", &self.menu.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Restaurant {
    /// Build the dining room from a floor plan
    pub fn new(plan: &FloorPlan) -> Self {
        Self::from_parts(&plan.tables, plan.menu_items())
    }

    pub fn from_parts(tables: &[TableSpec], menu: Vec<MenuItem>) -> Self {
        let tables = tables
            .iter()
            .enumerate()
            .map(|(index, spec)| Table::new(index, spec.seats, spec.location.clone()))
            .collect::<Vec<_>>();
        tracing::debug!(
            tables = tables.len(),
            menu_items = menu.len(),
            "Restaurant created"
        );
        Self {
            tables,
            menu,
            observers: Vec::new(),
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, index: usize) -> FloorResult<&Table> {
        self.tables.get(index).ok_or(FloorError::TableNotFound(index))
    }

    pub fn table_mut(&mut self, index: usize) -> FloorResult<&mut Table> {
        self.tables
            .get_mut(index)
            .ok_or(FloorError::TableNotFound(index))
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_item(&self, id: MenuItemId) -> FloorResult<&MenuItem> {
        self.menu.get(id.0).ok_or(FloorError::MenuItemNotFound(id.0))
    }

    // ========== Observers ==========

    pub fn add_observer(&mut self, observer: Arc<dyn RestaurantObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_observers(&self) {
        tracing::trace!(observers = self.observers.len(), "Notifying observers");
        for observer in &self.observers {
            observer.on_restaurant_changed();
        }
    }

    // ========== Item lookup ==========

    /// Find an item anywhere on the floor
    pub fn find_item(&self, id: ItemId) -> FloorResult<(ItemLocation, &OrderItem)> {
        for table in &self.tables {
            for (seat, order) in table.orders().iter().enumerate() {
                if let Some(item) = order.item(id) {
                    let location = ItemLocation {
                        table: table.index(),
                        seat,
                    };
                    return Ok((location, item));
                }
            }
        }
        Err(FloorError::ItemNotFound(id))
    }

    pub fn find_item_mut(&mut self, id: ItemId) -> FloorResult<&mut OrderItem> {
        let (location, _) = self.find_item(id)?;
        self.tables[location.table]
            .order_for_mut(location.seat)?
            .item_mut(id)
            .ok_or(FloorError::ItemNotFound(id))
    }

    /// Everything the kitchen still has to work on, by table, seat, then
    /// insertion order
    pub fn active_items(&self) -> Vec<ActiveItem<'_>> {
        let mut active = Vec::new();
        for table in &self.tables {
            for (seat, order) in table.orders().iter().enumerate() {
                for item in order.items() {
                    if item.has_been_ordered() && !item.has_been_served() {
                        active.push(ActiveItem {
                            location: ItemLocation {
                                table: table.index(),
                                seat,
                            },
                            item,
                        });
                    }
                }
            }
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    impl RestaurantObserver for Counter {
        fn on_restaurant_changed(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Named {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RestaurantObserver for Named {
        fn on_restaurant_changed(&self) {
            self.log.lock().push(self.name);
        }
    }

    fn restaurant() -> Restaurant {
        Restaurant::new(&FloorPlan::default())
    }

    #[test]
    fn test_built_from_plan() {
        let plan = FloorPlan::default();
        let r = Restaurant::new(&plan);
        assert_eq!(r.tables().len(), plan.tables.len());
        assert_eq!(r.menu().len(), plan.menu.len());
        for (i, table) in r.tables().iter().enumerate() {
            assert_eq!(table.index(), i);
            assert_eq!(table.seat_count(), plan.tables[i].seats);
            assert_eq!(table.location(), plan.tables[i].location);
        }
    }

    #[test]
    fn test_lookups_are_bounds_checked() {
        let r = restaurant();
        assert_eq!(r.table(99).unwrap_err(), FloorError::TableNotFound(99));
        assert_eq!(
            r.menu_item(MenuItemId(99)).unwrap_err(),
            FloorError::MenuItemNotFound(99)
        );
        assert_eq!(r.menu_item(MenuItemId(3)).unwrap().id, MenuItemId(3));
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let mut r = restaurant();
        let log = Arc::new(Mutex::new(Vec::new()));
        r.add_observer(Arc::new(Named { name: "server", log: log.clone() }));
        r.add_observer(Arc::new(Named { name: "kitchen", log: log.clone() }));

        r.notify_observers();
        r.notify_observers();
        assert_eq!(*log.lock(), vec!["server", "kitchen", "server", "kitchen"]);
    }

    #[test]
    fn test_observer_count() {
        let mut r = restaurant();
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        r.add_observer(counter.clone());
        assert_eq!(r.observer_count(), 1);
        r.notify_observers();
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_find_item_anywhere() {
        let mut r = restaurant();
        let dish = r.menu_item(MenuItemId(2)).unwrap().clone();
        let id = r.table_mut(4).unwrap().order_for_mut(1).unwrap().add_item(&dish);

        let (location, item) = r.find_item(id).unwrap();
        assert_eq!(location, ItemLocation { table: 4, seat: 1 });
        assert_eq!(item.details().id, MenuItemId(2));

        r.find_item_mut(id).unwrap().advance_state();
        assert!(r.find_item(id).unwrap().1.has_been_ordered());

        let stranger = ItemId::new();
        assert_eq!(r.find_item(stranger).unwrap_err(), FloorError::ItemNotFound(stranger));
    }

    #[test]
    fn test_active_items_skip_pending_and_served() {
        let mut r = restaurant();
        let dish = r.menu_item(MenuItemId(0)).unwrap().clone();

        let order = r.table_mut(2).unwrap().order_for_mut(0).unwrap();
        let served = order.add_item(&dish);
        let cooking = order.add_item(&dish);
        order.place_new_orders();
        order.add_item(&dish);
        for _ in 0..3 {
            order.item_mut(served).unwrap().advance_state();
        }
        order.item_mut(cooking).unwrap().advance_state();

        let other = r.table_mut(1).unwrap().order_for_mut(3).unwrap();
        let waiting = other.add_item(&dish);
        other.place_new_orders();

        let active: Vec<_> = r
            .active_items()
            .iter()
            .map(|a| (a.location, a.item.id()))
            .collect();
        assert_eq!(
            active,
            vec![
                (ItemLocation { table: 1, seat: 3 }, waiting),
                (ItemLocation { table: 2, seat: 0 }, cooking),
            ]
        );
    }
}
