//! Dining floor data model
//!
//! - **restaurant**: tables, menu catalog, observer fan-out
//! - **table**: seats, one order each
//! - **order**: per-seat item list with pending/placed split
//! - **order_item**: one dish and its kitchen lifecycle
//!
//! ```text
//! Restaurant ─┬─ Table ── Order (per seat) ── OrderItem ── ItemStatus
//!             ├─ MenuItem catalog
//!             └─ observers (notified after every mutation)
//! ```

pub mod error;
pub mod order;
pub mod order_item;
pub mod restaurant;
pub mod table;

pub use error::{FloorError, FloorResult};
pub use order::Order;
pub use order_item::OrderItem;
pub use restaurant::{ActiveItem, ItemLocation, Restaurant, RestaurantObserver};
pub use table::Table;
