//! Data models
//!
//! 与客户端页面共享的存储结构，字段名沿用 JSON 存储中的 camelCase。

pub mod menu;
pub mod mesa;
pub mod order;
pub mod session;

pub use menu::*;
pub use mesa::*;
pub use order::*;
pub use session::*;
