//! Dining Floor - table-service order workflow
//!
//! Servers seat guests, build per-seat orders and send them to the
//! kitchen; the kitchen moves each dish through its stages until served.
//!
//! # 模块结构
//!
//! ```text
//! dining-floor/src/
//! ├── core/          # 配置
//! ├── floor/         # Restaurant / Table / Order / OrderItem
//! ├── controller/    # 编辑上下文状态机、视图契约、后厨看板
//! ├── console.rs     # 命令行终端
//! └── utils/         # 日志
//! ```

pub mod console;
pub mod controller;
pub mod core;
pub mod floor;
pub mod utils;

// Re-export 公共类型
pub use console::{Console, ConsoleCommand, ConsoleError};
pub use controller::{Context, LogView, RecordingView, Rendered, Terminal, View};
pub use crate::core::Config;
pub use floor::{FloorError, FloorResult, Order, OrderItem, Restaurant, RestaurantObserver, Table};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
