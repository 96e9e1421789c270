//! Floor Plan Model
//!
//! Construction input of a restaurant: the ordered table list and the
//! ordered menu catalog. Positions are significant, the UI addresses
//! tables, seats and dishes by index.

use super::menu_item::{MenuItem, MenuItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One table of the floor plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub seats: usize,
    pub location: String,
}

/// One dish of the menu catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: Decimal,
}

/// Floor plan validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlanError {
    #[error("Table {0} has no seats")]
    EmptyTable(usize),

    #[error("Menu item {index} ({name}) has a negative price")]
    NegativePrice { index: usize, name: String },

    #[error("Menu item {0} has an empty name")]
    UnnamedMenuItem(usize),
}

/// Tables and menu the restaurant is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub tables: Vec<TableSpec>,
    pub menu: Vec<MenuEntry>,
}

impl FloorPlan {
    /// Check the plan can be turned into a restaurant
    pub fn validate(&self) -> Result<(), FloorPlanError> {
        if let Some(index) = self.tables.iter().position(|t| t.seats == 0) {
            return Err(FloorPlanError::EmptyTable(index));
        }
        for (index, entry) in self.menu.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(FloorPlanError::UnnamedMenuItem(index));
            }
            if entry.price.is_sign_negative() && !entry.price.is_zero() {
                return Err(FloorPlanError::NegativePrice {
                    index,
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build the menu catalog, ids follow catalog order
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.menu
            .iter()
            .enumerate()
            .map(|(i, entry)| MenuItem::new(MenuItemId(i), entry.name.clone(), entry.price))
            .collect()
    }
}

fn table(seats: usize, location: &str) -> TableSpec {
    TableSpec {
        seats,
        location: location.to_string(),
    }
}

fn dish(name: &str, cents: i64) -> MenuEntry {
    MenuEntry {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
    }
}

impl Default for FloorPlan {
    /// Built-in dining room used when no floor plan file is configured
    fn default() -> Self {
        Self {
            tables: vec![
                table(4, "Window 1"),
                table(4, "Window 2"),
                table(6, "Booth 1"),
                table(6, "Booth 2"),
                table(2, "Bar 1"),
                table(2, "Bar 2"),
                table(10, "Banquet"),
                table(4, "Patio 1"),
                table(4, "Patio 2"),
                table(8, "Private Room"),
            ],
            menu: vec![
                dish("Tomato Soup", 650),
                dish("Caesar Salad", 900),
                dish("Garlic Bread", 450),
                dish("Steak Frites", 2450),
                dish("Grilled Salmon", 2200),
                dish("Mushroom Risotto", 1750),
                dish("Cheeseburger", 1500),
                dish("Chocolate Cake", 800),
                dish("Lemonade", 350),
                dish("Espresso", 250),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_valid() {
        let plan = FloorPlan::default();
        assert!(plan.validate().is_ok());
        assert_eq!(plan.tables.len(), 10);
        assert!(plan.tables[6].seats >= 8);
    }

    #[test]
    fn test_menu_items_follow_catalog_order() {
        let plan = FloorPlan::default();
        let items = plan.menu_items();
        assert_eq!(items.len(), plan.menu.len());
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, MenuItemId(i));
            assert_eq!(item.name, plan.menu[i].name);
        }
    }

    #[test]
    fn test_rejects_seatless_table() {
        let mut plan = FloorPlan::default();
        plan.tables[3].seats = 0;
        assert_eq!(plan.validate(), Err(FloorPlanError::EmptyTable(3)));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut plan = FloorPlan::default();
        plan.menu[1].price = Decimal::new(-100, 2);
        assert!(matches!(
            plan.validate(),
            Err(FloorPlanError::NegativePrice { index: 1, .. })
        ));
    }

    #[test]
    fn test_parses_json_plan() {
        let json = r#"{
            "tables": [{ "seats": 2, "location": "Corner" }],
            "menu": [{ "name": "Tea", "price": 2.5 }]
        }"#;
        let plan: FloorPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.tables[0].seats, 2);
        assert_eq!(plan.menu[0].price, Decimal::new(25, 1));
    }
}
