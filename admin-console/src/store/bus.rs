//! 存储变更总线
//!
//! ```text
//! AppStore (admin) ──persist()──┐                 ┌──► SyncListener (admin)
//!                               ├─► StoreBus ─────┤
//! AppStore (customer) ─persist()┘  broadcast      └──► SyncListener (customer)
//! ```
//!
//! 每次整表写入发布一个 [`StoreEvent`]，订阅者按 `origin` 过滤掉自己的写入。

use dashmap::DashMap;
use shared::{StorageKey, StoreEvent};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default capacity of the broadcast channel
pub const DEFAULT_BUS_CAPACITY: usize = 256;

/// 资源版本管理器
///
/// 每个存储键维护独立的版本号，支持原子递增。
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<StorageKey, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 递增指定键的版本号并返回新值 (从 1 开始)
    pub fn increment(&self, key: StorageKey) -> u64 {
        let mut entry = self.versions.entry(key).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 当前版本号，未写入过返回 0
    pub fn get(&self, key: StorageKey) -> u64 {
        self.versions.get(&key).map(|v| *v).unwrap_or(0)
    }
}

/// 存储变更总线
#[derive(Debug, Clone)]
pub struct StoreBus {
    tx: broadcast::Sender<StoreEvent>,
    versions: Arc<ResourceVersions>,
}

impl StoreBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            versions: Arc::new(ResourceVersions::new()),
        }
    }

    /// 发布变更通知
    ///
    /// 没有订阅者不算错误，写入已经落盘。
    pub fn publish(&self, key: StorageKey, origin: Uuid) -> StoreEvent {
        let version = self.versions.increment(key);
        let event = StoreEvent::new(key, origin, version);
        if self.tx.send(event.clone()).is_err() {
            tracing::debug!(key = %key, version, "Store event published with no subscribers");
        }
        event
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn version(&self, key: StorageKey) -> u64 {
        self.versions.get(key)
    }
}

impl Default for StoreBus {
    fn default() -> Self {
        Self::new()
    }
}
