//! 控制台错误类型
//!
//! 找不到记录不算错误 (静默忽略)，这里只有真正需要上报的失败。

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("No admin session, login required")]
    NoSession,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
