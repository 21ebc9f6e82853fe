use std::path::PathBuf;
use std::time::Duration;

/// 管理端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量 (或 `.env`) 覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | STORE_FILE | store.redb | 共享存储文件名 |
/// | TABLE_COUNT | 10 | 首次启动时创建的桌台数 |
/// | CLOCK_TICK_MS | 1000 | 时钟刷新周期 |
/// | ORDER_POLL_MS | 5000 | 订单轮询周期 |
/// | BUS_CAPACITY | 256 | 变更通知通道容量 |
/// | LOG_LEVEL | info | 日志级别 |
/// | CURRENCY_SYMBOL | $ | 货币符号 |
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: PathBuf,
    pub store_file: String,
    pub table_count: u32,
    pub clock_tick_ms: u64,
    pub order_poll_ms: u64,
    pub bus_capacity: usize,
    pub log_level: String,
    pub currency_symbol: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let d = Self::defaults();
        Self {
            work_dir: std::env::var("WORK_DIR").map(PathBuf::from).unwrap_or(d.work_dir),
            store_file: std::env::var("STORE_FILE").unwrap_or(d.store_file),
            table_count: env_parse("TABLE_COUNT", d.table_count),
            clock_tick_ms: env_parse("CLOCK_TICK_MS", d.clock_tick_ms),
            order_poll_ms: env_parse("ORDER_POLL_MS", d.order_poll_ms),
            bus_capacity: env_parse("BUS_CAPACITY", d.bus_capacity),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(d.log_level),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or(d.currency_symbol),
        }
    }

    fn defaults() -> Self {
        Self {
            work_dir: PathBuf::from("./data"),
            store_file: "store.redb".into(),
            table_count: 10,
            clock_tick_ms: 1000,
            order_poll_ms: 5000,
            bus_capacity: 256,
            log_level: "info".into(),
            currency_symbol: "$".into(),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.work_dir.join(&self.store_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.work_dir.join("logs")
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.max(1))
    }

    pub fn order_poll(&self) -> Duration {
        Duration::from_millis(self.order_poll_ms.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_work_dir() {
        let config = Config {
            work_dir: "/tmp/sazon".into(),
            ..Config::defaults()
        };
        assert_eq!(config.store_path(), PathBuf::from("/tmp/sazon/store.redb"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/sazon/logs"));
        assert_eq!(config.order_poll(), Duration::from_secs(5));
        assert_eq!(config.clock_tick(), Duration::from_secs(1));
    }
}
