//! 核心模块 - 配置、错误、后台任务

pub mod config;
pub mod error;
pub mod tasks;

pub use config::Config;
pub use error::{ConsoleError, ConsoleResult};
pub use tasks::{BackgroundTasks, TaskKind};
