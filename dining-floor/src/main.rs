use dining_floor::{
    Config, Console, LogView, Restaurant, RestaurantObserver, Terminal, init_logger_with_file,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts floor changes for the shutdown summary
#[derive(Default)]
struct ChangeCounter(AtomicU64);

impl RestaurantObserver for ChangeCounter {
    fn on_restaurant_changed(&self) {
        let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(changes = n, "Floor changed");
    }
}

fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env 可选)
    dotenv::dotenv().ok();

    // 2. 加载配置 + 日志
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::info!(environment = %config.environment, "Dining floor starting");

    // 3. 桌台与菜单
    let plan = config.load_floor_plan()?;
    let mut restaurant = Restaurant::new(&plan);
    let changes = Arc::new(ChangeCounter::default());
    restaurant.add_observer(changes.clone());

    // 4. 终端
    let mut console = Console::new(Terminal::new(restaurant, LogView));
    console.run(std::io::stdin().lock())?;

    tracing::info!(changes = changes.0.load(Ordering::Relaxed), "Dining floor stopped");
    Ok(())
}
