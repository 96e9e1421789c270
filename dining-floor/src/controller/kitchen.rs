//! Kitchen board data
//!
//! The kitchen does not route by station: every ordered, not yet served
//! dish shows up on one board with the label of its next action.

use crate::floor::Restaurant;
use serde::Serialize;
use shared::{ItemId, ItemStatus};

/// One row of the kitchen board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitchenRow {
    pub item_id: ItemId,
    pub table: usize,
    pub seat: usize,
    pub name: String,
    pub status: ItemStatus,
    pub button: &'static str,
}

/// Label of the kitchen button for a raw lifecycle counter
pub fn button_label(display_state: u32) -> &'static str {
    ItemStatus::from_code(display_state).kitchen_label()
}

/// Scan the floor for everything the kitchen still has to do
pub fn kitchen_board(restaurant: &Restaurant) -> Vec<KitchenRow> {
    restaurant
        .active_items()
        .into_iter()
        .map(|active| KitchenRow {
            item_id: active.item.id(),
            table: active.location.table,
            seat: active.location.seat,
            name: active.item.details().name.clone(),
            status: active.item.status(),
            button: button_label(active.item.display_state()),
        })
        .collect()
}
