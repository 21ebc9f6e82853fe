//! 存储变更事件定义
//!
//! 管理端与客户端共享同一个存储，每次整表写入都会广播一个
//! [`StoreEvent`]，其他上下文据此重新加载对应集合。

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod payload;
pub use payload::*;

/// 存储键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKey {
    /// 桌台集合
    Mesas,
    /// 订单集合
    Orders,
    /// 菜单
    Menu,
    /// 管理员会话
    AdminSession,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Mesas,
        StorageKey::Orders,
        StorageKey::Menu,
        StorageKey::AdminSession,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mesas => "mesas",
            Self::Orders => "orders",
            Self::Menu => "menu",
            Self::AdminSession => "admin_session",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 存储变更通知
///
/// `origin` 是写入方上下文的 ID；写入方自己不处理自己的通知。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEvent {
    pub key: StorageKey,
    pub origin: Uuid,
    /// Per-key version, incremented on every write
    pub version: u64,
}

impl StoreEvent {
    pub fn new(key: StorageKey, origin: Uuid, version: u64) -> Self {
        Self { key, origin, version }
    }

    /// True if the event was produced by another context
    pub fn is_foreign(&self, context: Uuid) -> bool {
        self.origin != context
    }
}
