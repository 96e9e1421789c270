use anyhow::Context as _;
use shared::{ErrorCode, FloorPlan};
use std::path::Path;

/// 终端配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | FLOOR_PLAN | (内置) | 桌台与菜单 JSON 文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// FLOOR_PLAN=/etc/dining/floor.json LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Floor plan file; the built-in plan is used when unset
    pub floor_plan_path: Option<String>,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            floor_plan_path: std::env::var("FLOOR_PLAN").ok().filter(|p| !p.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|p| !p.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Load and validate the floor plan
    pub fn load_floor_plan(&self) -> anyhow::Result<FloorPlan> {
        match &self.floor_plan_path {
            Some(path) => read_floor_plan(path).inspect_err(|e| {
                tracing::error!(
                    code = %ErrorCode::ConfigError,
                    path = %path,
                    error = %format!("{e:#}"),
                    "Cannot load floor plan"
                );
            }),
            None => {
                tracing::info!("No floor plan configured, using built-in plan");
                Ok(FloorPlan::default())
            }
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            floor_plan_path: None,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

/// Read a JSON floor plan file
pub fn read_floor_plan(path: impl AsRef<Path>) -> anyhow::Result<FloorPlan> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read floor plan {}", path.display()))?;
    let plan: FloorPlan = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid floor plan {}", path.display()))?;
    plan.validate()
        .with_context(|| format!("Rejected floor plan {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        tables = plan.tables.len(),
        menu_items = plan.menu.len(),
        "Floor plan loaded"
    );
    Ok(plan)
}
