//! Admin session

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// 管理员会话，登录页写入，退出时清除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub username: String,
    pub started_at: Timestamp,
}

impl AdminSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            started_at: crate::util::now_millis(),
        }
    }
}
