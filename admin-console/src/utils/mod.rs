//! 工具模块
//!
//! - [`format`] - 金额、时间的显示格式
//! - [`logger`] - 日志初始化

pub mod format;
pub mod logger;

pub use format::Formatter;
