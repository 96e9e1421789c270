//! Editing contexts and the terminal that drives them
//!
//! The active [`Context`] decides which operations are legal. A call made
//! in the wrong context fails with [`FloorError::InvalidContext`] and
//! changes nothing.
//!
//! ```text
//! Restaurant ──table_touched──▶ Table ──seat_touched──▶ Order
//!     ▲                          │  ▲                     │
//!     └────────── done ──────────┘  └─ update_order ──────┤
//!                                   └─ cancel_changes ────┘
//!
//! Kitchen: progress_state / button_text (entered with enter_kitchen)
//! ```
//!
//! Every mutation runs to completion, then observers are notified, then the
//! view is asked to draw the resulting context.

pub mod kitchen;
pub mod view;

pub use kitchen::{KitchenRow, button_label, kitchen_board};
pub use view::{LogView, RecordingView, Rendered, View};

use crate::floor::{FloorError, FloorResult, Order, Restaurant};
use shared::{ItemId, MenuItemId};
use std::fmt;

/// Active editing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Restaurant overview
    #[default]
    Restaurant,
    /// One table selected
    Table { table: usize },
    /// Editing one seat's order
    Order { table: usize, seat: usize },
    /// Kitchen board
    Kitchen,
}

impl Context {
    pub const fn name(&self) -> &'static str {
        match self {
            Context::Restaurant => "restaurant",
            Context::Table { .. } => "table",
            Context::Order { .. } => "order",
            Context::Kitchen => "kitchen",
        }
    }

    fn reject(&self, operation: &'static str) -> FloorError {
        tracing::warn!(operation, context = self.name(), "Operation rejected in context");
        FloorError::InvalidContext {
            operation,
            context: self.name(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Restaurant => write!(f, "restaurant"),
            Context::Table { table } => write!(f, "table {}", table),
            Context::Order { table, seat } => write!(f, "table {} seat {}", table, seat),
            Context::Kitchen => write!(f, "kitchen"),
        }
    }
}

/// One operator terminal: the restaurant, the active context and a view
pub struct Terminal<V: View> {
    restaurant: Restaurant,
    context: Context,
    view: V,
}

impl<V: View> fmt::Debug for Terminal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("restaurant", &self.restaurant)
            .field("context", &self.context)
            .finish()
    }
}

impl<V: View> Terminal<V> {
    /// Start at the restaurant overview and draw it
    pub fn new(restaurant: Restaurant, view: V) -> Self {
        let mut terminal = Self {
            restaurant,
            context: Context::Restaurant,
            view,
        };
        terminal.redraw();
        terminal
    }

    pub fn context(&self) -> Context {
        self.context
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Order being edited, if the order context is active
    pub fn current_order(&self) -> Option<&Order> {
        match self.context {
            Context::Order { table, seat } => self
                .restaurant
                .table(table)
                .and_then(|t| t.order_for(seat))
                .ok(),
            _ => None,
        }
    }

    /// Draw the active context
    pub fn redraw(&mut self) {
        let Self {
            restaurant,
            context,
            view,
        } = self;
        match *context {
            Context::Restaurant => view.render_restaurant(restaurant),
            Context::Table { table } => match restaurant.table(table) {
                Ok(t) => view.render_table(t),
                Err(e) => tracing::error!(error = %e, "Cannot draw table"),
            },
            Context::Order { table, seat } => {
                match restaurant.table(table).and_then(|t| Ok((t, t.order_for(seat)?))) {
                    Ok((t, order)) => view.render_order(t, seat, order, restaurant.menu()),
                    Err(e) => tracing::error!(error = %e, "Cannot draw order"),
                }
            }
            Context::Kitchen => view.render_kitchen(restaurant),
        }
    }

    fn switch_to(&mut self, next: Context) {
        tracing::debug!(from = %self.context, to = %next, "Context switch");
        self.context = next;
    }

    /// Mutation finished: notify observers, then draw
    fn commit(&mut self) {
        self.restaurant.notify_observers();
        self.redraw();
    }

    fn order_position(&self, operation: &'static str) -> FloorResult<(usize, usize)> {
        match self.context {
            Context::Order { table, seat } => Ok((table, seat)),
            other => Err(other.reject(operation)),
        }
    }

    fn current_order_mut(&mut self, operation: &'static str) -> FloorResult<&mut Order> {
        let (table, seat) = self.order_position(operation)?;
        self.restaurant.table_mut(table)?.order_for_mut(seat)
    }

    fn require_kitchen(&self, operation: &'static str) -> FloorResult<()> {
        match self.context {
            Context::Kitchen => Ok(()),
            other => Err(other.reject(operation)),
        }
    }

    // ========== Restaurant context ==========

    pub fn table_touched(&mut self, index: usize) -> FloorResult<()> {
        match self.context {
            Context::Restaurant => {
                self.restaurant.table(index)?;
                self.switch_to(Context::Table { table: index });
                self.redraw();
                Ok(())
            }
            other => Err(other.reject("table_touched")),
        }
    }

    // ========== Table context ==========

    pub fn seat_touched(&mut self, seat: usize) -> FloorResult<()> {
        match self.context {
            Context::Table { table } => {
                self.restaurant.table(table)?.order_for(seat)?;
                self.switch_to(Context::Order { table, seat });
                self.redraw();
                Ok(())
            }
            other => Err(other.reject("seat_touched")),
        }
    }

    pub fn done(&mut self) -> FloorResult<()> {
        match self.context {
            Context::Table { .. } => {
                self.switch_to(Context::Restaurant);
                self.redraw();
                Ok(())
            }
            other => Err(other.reject("done")),
        }
    }

    // ========== Order context ==========

    /// Append a pending item for the dish at `menu_item`
    pub fn add_item(&mut self, menu_item: MenuItemId) -> FloorResult<ItemId> {
        self.order_position("add_item")?;
        let dish = self.restaurant.menu_item(menu_item)?.clone();
        let id = self.current_order_mut("add_item")?.add_item(&dish);
        tracing::debug!(item_id = %id, dish = %dish.name, context = %self.context, "Item added");
        self.commit();
        Ok(id)
    }

    /// Remove an item from the current order if the kitchen has not
    /// started on it.
    ///
    /// Returns `Ok(false)` without touching anything when the item is
    /// already cooking or beyond, wherever it sits on the floor. A
    /// cancellable item that is not on the current order is an error.
    pub fn cancel_item(&mut self, item: ItemId) -> FloorResult<bool> {
        self.order_position("cancel_item")?;
        let (_, order_item) = self.restaurant.find_item(item)?;
        if !order_item.can_be_cancelled() {
            tracing::warn!(item_id = %item, "Cancellation rejected, kitchen already started");
            return Ok(false);
        }
        self.current_order_mut("cancel_item")?.remove_item(item)?;
        tracing::debug!(item_id = %item, "Item cancelled");
        self.commit();
        Ok(true)
    }

    /// Send pending items to the kitchen and return to the table
    pub fn update_order(&mut self) -> FloorResult<()> {
        let (table, seat) = self.order_position("update_order")?;
        let placed = self.current_order_mut("update_order")?.place_new_orders();
        tracing::info!(table, seat, placed, "Order placed");
        self.switch_to(Context::Table { table });
        self.commit();
        Ok(())
    }

    /// Throw away pending items and return to the table
    pub fn cancel_changes(&mut self) -> FloorResult<()> {
        let (table, seat) = self.order_position("cancel_changes")?;
        let discarded = self.current_order_mut("cancel_changes")?.remove_unordered_items();
        tracing::info!(table, seat, discarded, "Order changes discarded");
        self.switch_to(Context::Table { table });
        self.commit();
        Ok(())
    }

    // ========== Kitchen context ==========

    /// Suspend the current context and open the kitchen board.
    /// Returns the suspended context so it can be resumed.
    pub fn enter_kitchen(&mut self) -> Context {
        let previous = self.context;
        self.switch_to(Context::Kitchen);
        self.redraw();
        previous
    }

    /// Return to a previously suspended context
    pub fn resume(&mut self, context: Context) -> FloorResult<()> {
        match context {
            Context::Table { table } => {
                self.restaurant.table(table)?;
            }
            Context::Order { table, seat } => {
                self.restaurant.table(table)?.order_for(seat)?;
            }
            Context::Restaurant | Context::Kitchen => {}
        }
        self.switch_to(context);
        self.redraw();
        Ok(())
    }

    /// Move an item to its next kitchen stage. Works on any item on the
    /// floor and never checks bounds.
    pub fn progress_state(&mut self, item: ItemId) -> FloorResult<()> {
        self.require_kitchen("progress_state")?;
        let order_item = self.restaurant.find_item_mut(item)?;
        order_item.advance_state();
        tracing::info!(item_id = %item, status = %order_item.status(), "Item progressed");
        self.commit();
        Ok(())
    }

    /// Label of the kitchen button for an item
    pub fn button_text(&self, item: ItemId) -> FloorResult<&'static str> {
        self.require_kitchen("button_text")?;
        let (_, order_item) = self.restaurant.find_item(item)?;
        Ok(button_label(order_item.display_state()))
    }
}
