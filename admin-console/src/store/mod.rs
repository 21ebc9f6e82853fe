//! 数据存储层
//!
//! - [`SharedStorage`] - redb 键值存储，每个键保存一整个集合
//! - [`StoreBus`] - 写入后广播的变更通知
//! - [`AppStore`] - 单个上下文 (管理端/客户端) 的内存快照
//! - [`DataStore`] - 控制台依赖的能力接口

pub mod app_store;
pub mod bus;
pub mod seed;
pub mod storage;

pub use app_store::AppStore;
pub use bus::{ResourceVersions, StoreBus};
pub use seed::seed_defaults;
pub use storage::{SharedStorage, StoreError, StoreResult};

use shared::models::MenuItemUpdate;
use shared::{AdminSession, Menu, Mesa, MesaId, Order, OrderStatus, StorageKey};
use uuid::Uuid;

/// 控制台使用的存储能力接口
///
/// Table mutators only touch the in-memory snapshot and need an explicit
/// [`DataStore::persist`]. Order and menu mutators persist on their own.
/// Mutators return `Ok(false)` when the id is unknown.
pub trait DataStore {
    /// Identifies this context on the store bus
    fn context_id(&self) -> Uuid;

    // ========== Tables ==========

    fn list_tables(&self) -> &[Mesa];

    fn get_table(&self, id: MesaId) -> Option<&Mesa>;

    fn activate_table(&mut self, id: MesaId) -> bool;

    fn deactivate_table(&mut self, id: MesaId) -> bool;

    /// Write the whole in-memory collection for `key` and notify other contexts
    fn persist(&mut self, key: StorageKey) -> StoreResult<()>;

    // ========== Orders ==========

    /// Pending, confirmed and ready orders in creation order
    fn active_orders(&self) -> Vec<&Order>;

    fn get_order(&self, id: &str) -> Option<&Order>;

    /// Ready and cancelled orders, most recent first
    fn order_history(&self) -> Vec<&Order>;

    fn update_order_status(&mut self, id: &str, status: OrderStatus) -> StoreResult<bool>;

    // ========== Menu ==========

    fn menu(&self) -> &Menu;

    fn toggle_menu_item(&mut self, id: &str) -> StoreResult<bool>;

    fn update_menu_item(&mut self, id: &str, update: MenuItemUpdate) -> StoreResult<bool>;

    fn delete_menu_item(&mut self, id: &str) -> StoreResult<bool>;

    // ========== Sync / Session ==========

    /// Re-read exactly one collection from the shared storage
    fn reload(&mut self, key: StorageKey) -> StoreResult<()>;

    fn session(&self) -> Option<&AdminSession>;

    fn clear_session(&mut self) -> StoreResult<()>;
}
