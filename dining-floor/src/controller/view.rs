//! View contract
//!
//! The terminal's only side effect outside the model is asking its view to
//! draw the active context. Views get read-only access to whatever they
//! need; they never mutate the floor.

use super::kitchen::kitchen_board;
use crate::floor::{Order, Restaurant, Table};
use shared::MenuItem;

pub trait View {
    /// Restaurant overview (all tables)
    fn render_restaurant(&mut self, restaurant: &Restaurant);

    /// One table and its seats
    fn render_table(&mut self, table: &Table);

    /// Order editor for one seat, with the catalog to pick from
    fn render_order(&mut self, table: &Table, seat: usize, order: &Order, menu: &[MenuItem]);

    /// Kitchen board; the view scans the restaurant for active items itself
    fn render_kitchen(&mut self, restaurant: &Restaurant);
}

/// What a view was last asked to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Restaurant,
    Table(usize),
    Order { table: usize, seat: usize },
    Kitchen,
}

/// Headless view remembering every render request
#[derive(Debug, Default)]
pub struct RecordingView {
    history: Vec<Rendered>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Rendered> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[Rendered] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl View for RecordingView {
    fn render_restaurant(&mut self, _restaurant: &Restaurant) {
        self.history.push(Rendered::Restaurant);
    }

    fn render_table(&mut self, table: &Table) {
        self.history.push(Rendered::Table(table.index()));
    }

    fn render_order(&mut self, table: &Table, seat: usize, _order: &Order, _menu: &[MenuItem]) {
        self.history.push(Rendered::Order {
            table: table.index(),
            seat,
        });
    }

    fn render_kitchen(&mut self, _restaurant: &Restaurant) {
        self.history.push(Rendered::Kitchen);
    }
}

/// View that draws through structured log events
#[derive(Debug, Default)]
pub struct LogView;

impl View for LogView {
    fn render_restaurant(&mut self, restaurant: &Restaurant) {
        for table in restaurant.tables() {
            tracing::info!(
                table = table.index(),
                location = table.location(),
                seats = table.seat_count(),
                active = table.has_any_active_orders(),
                "Table"
            );
        }
    }

    fn render_table(&mut self, table: &Table) {
        tracing::info!(
            table = table.index(),
            location = table.location(),
            active = table.has_any_active_orders(),
            "Table detail"
        );
        for (seat, order) in table.orders().iter().enumerate() {
            tracing::info!(
                seat,
                items = order.len(),
                total = %order.total_cost(),
                "Seat"
            );
        }
    }

    fn render_order(&mut self, table: &Table, seat: usize, order: &Order, menu: &[MenuItem]) {
        tracing::info!(
            table = table.index(),
            seat,
            total = %order.total_cost(),
            "Order editor"
        );
        for item in order.items() {
            tracing::info!(
                item_id = %item.id(),
                name = %item.details().name,
                price = %item.details().price,
                status = %item.status(),
                cancellable = item.can_be_cancelled(),
                "Order item"
            );
        }
        for dish in menu {
            tracing::debug!(menu_id = %dish.id, name = %dish.name, price = %dish.price, "Menu");
        }
    }

    fn render_kitchen(&mut self, restaurant: &Restaurant) {
        let board = kitchen_board(restaurant);
        tracing::info!(tickets = board.len(), "Kitchen board");
        match serde_json::to_string(&board) {
            Ok(snapshot) => tracing::debug!(%snapshot, "Kitchen board snapshot"),
            Err(e) => tracing::warn!(error = %e, "Cannot serialize kitchen board"),
        }
        for row in board {
            tracing::info!(
                item_id = %row.item_id,
                table = row.table,
                seat = row.seat,
                name = %row.name,
                status = %row.status,
                button = row.button,
                "Kitchen ticket"
            );
        }
    }
}
