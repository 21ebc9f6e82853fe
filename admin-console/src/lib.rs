//! La Sazón Manaba - 餐厅管理端控制台
//!
//! # 架构概述
//!
//! - **存储** (`store`): redb 共享存储 + 变更广播，每个上下文一份内存快照
//! - **控制台** (`console`): 视图路由、用户操作、实时同步
//! - **视图模型** (`view`): 从存储快照构建的纯数据
//! - **终端界面** (`tui`): ratatui 实现的展示层
//!
//! # 模块结构
//!
//! ```text
//! admin-console/src/
//! ├── core/       # 配置、错误、后台任务
//! ├── store/      # 共享存储、变更总线、上下文快照
//! ├── view/       # 视图模型与渲染
//! ├── console/    # 控制器与事件循环任务
//! ├── tui/        # 终端界面
//! ├── simulator   # 顾客端模拟器
//! └── utils/      # 格式化、日志
//! ```

pub mod console;
pub mod core;
pub mod simulator;
pub mod store;
pub mod tui;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export 公共类型
pub use console::{AdminCommand, AdminConsole, ConsoleEvent, Flow, Presenter};
pub use core::{BackgroundTasks, Config, ConsoleError, ConsoleResult, TaskKind};
pub use store::{AppStore, DataStore, SharedStorage, StoreBus, StoreError, seed_defaults};
pub use utils::Formatter;
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置环境 (工作目录、日志)
///
/// The console draws on stdout, so `log_to_file` routes logs to the
/// work dir instead of stderr.
pub fn setup_environment(config: &Config, log_to_file: bool) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    let level = Some(config.log_level.as_str());
    if log_to_file {
        init_logger_with_file(level, Some(&config.log_dir()));
    } else {
        init_logger(level);
    }
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   __           ____
  / /  ___ _   / __/__ ____ ___  ___
 / /__/ _ `/  _\ \/ _ `/_ // _ \/ _ \
/____/\_,_/  /___/\_,_//__/\___/_//_/
        M A N A B A  ·  admin
    "#
    );
}
