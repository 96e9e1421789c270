//! 核心模块 - 配置
//!
//! - [`Config`] - 终端配置

pub mod config;

pub use config::{Config, read_floor_plan};
