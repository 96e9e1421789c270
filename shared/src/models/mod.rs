//! Restaurant configuration models

pub mod floor_plan;
pub mod menu_item;

pub use floor_plan::{FloorPlan, FloorPlanError, MenuEntry, TableSpec};
pub use menu_item::{MenuItem, MenuItemId};
