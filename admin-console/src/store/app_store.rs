//! AppStore - one context's view of the shared store
//!
//! Each screen (admin console, customer ordering) owns one `AppStore`.
//! It keeps an in-memory snapshot of every collection and writes a whole
//! collection back on each mutation:
//!
//! ```text
//! mutate snapshot ──► persist(key) ──► SharedStorage.save(key)
//!                                   └─► StoreBus.publish(key, origin)
//! ```
//!
//! Other contexts receive the event and call [`DataStore::reload`].

use shared::models::MenuItemUpdate;
use shared::util::{now_millis, order_id};
use shared::{AdminSession, Menu, Mesa, MesaId, MesaStatus, Order, OrderItem, OrderStatus, StorageKey};
use uuid::Uuid;

use super::DataStore;
use super::bus::StoreBus;
use super::storage::{SharedStorage, StoreResult};

pub struct AppStore {
    /// 上下文 ID (写入通知的 origin)
    id: Uuid,
    storage: SharedStorage,
    bus: StoreBus,
    mesas: Vec<Mesa>,
    orders: Vec<Order>,
    menu: Menu,
    session: Option<AdminSession>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("id", &self.id)
            .field("mesas", &self.mesas.len())
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

impl AppStore {
    /// Connect a new context and load every collection
    pub fn connect(storage: SharedStorage, bus: StoreBus) -> StoreResult<Self> {
        let mut store = Self {
            id: Uuid::new_v4(),
            storage,
            bus,
            mesas: Vec::new(),
            orders: Vec::new(),
            menu: Menu::default(),
            session: None,
        };
        for key in StorageKey::ALL {
            store.reload(key)?;
        }
        tracing::debug!(context = %store.id, tables = store.mesas.len(), orders = store.orders.len(), "Store context connected");
        Ok(store)
    }

    pub fn bus(&self) -> &StoreBus {
        &self.bus
    }

    /// All orders, in creation order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // ========== Customer-side operations ==========

    /// 客人入座 (available → occupied)
    pub fn seat_table(&mut self, id: MesaId) -> StoreResult<bool> {
        let seated = match self.mesas.iter_mut().find(|m| m.id == id) {
            Some(mesa) => mesa.seat(now_millis()),
            None => false,
        };
        if seated {
            self.persist(StorageKey::Mesas)?;
        }
        Ok(seated)
    }

    /// 下单
    ///
    /// Seats the table if it is still available. Returns `None` for unknown
    /// or inactive tables. Both collections are re-read first so the
    /// full-collection writes keep changes made by other contexts.
    pub fn place_order(&mut self, mesa_id: MesaId, items: Vec<OrderItem>) -> StoreResult<Option<Order>> {
        self.reload(StorageKey::Orders)?;
        self.reload(StorageKey::Mesas)?;
        let now = now_millis();
        let Some(mesa) = self.mesas.iter_mut().find(|m| m.id == mesa_id) else {
            return Ok(None);
        };
        if mesa.status == MesaStatus::Inactive {
            return Ok(None);
        }
        mesa.seat(now);

        let order = Order::new(order_id(), mesa_id, items, now);
        mesa.orders.push(order.id.clone());
        self.orders.push(order.clone());

        self.persist(StorageKey::Orders)?;
        self.persist(StorageKey::Mesas)?;
        tracing::info!(order_id = %order.id, mesa_id, total = %order.total, "Order placed");
        Ok(Some(order))
    }

    /// 写入管理员会话 (登录页)
    pub fn login(&mut self, username: &str) -> StoreResult<AdminSession> {
        let session = AdminSession::new(username);
        self.session = Some(session.clone());
        self.persist(StorageKey::AdminSession)?;
        Ok(session)
    }
}

impl DataStore for AppStore {
    fn context_id(&self) -> Uuid {
        self.id
    }

    fn list_tables(&self) -> &[Mesa] {
        &self.mesas
    }

    fn get_table(&self, id: MesaId) -> Option<&Mesa> {
        self.mesas.iter().find(|m| m.id == id)
    }

    fn activate_table(&mut self, id: MesaId) -> bool {
        match self.mesas.iter_mut().find(|m| m.id == id) {
            Some(mesa) => {
                mesa.activate();
                true
            }
            None => false,
        }
    }

    fn deactivate_table(&mut self, id: MesaId) -> bool {
        match self.mesas.iter_mut().find(|m| m.id == id) {
            Some(mesa) => {
                mesa.deactivate();
                true
            }
            None => false,
        }
    }

    fn persist(&mut self, key: StorageKey) -> StoreResult<()> {
        match key {
            StorageKey::Mesas => self.storage.save(key, &self.mesas)?,
            StorageKey::Orders => self.storage.save(key, &self.orders)?,
            StorageKey::Menu => self.storage.save(key, &self.menu)?,
            StorageKey::AdminSession => match &self.session {
                Some(session) => self.storage.save(key, session)?,
                None => {
                    self.storage.remove(key)?;
                }
            },
        }
        let event = self.bus.publish(key, self.id);
        tracing::debug!(key = %key, version = event.version, context = %self.id, "Collection persisted");
        Ok(())
    }

    fn active_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status.is_active()).collect()
    }

    fn get_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    fn order_history(&self) -> Vec<&Order> {
        let mut history: Vec<&Order> = self.orders.iter().filter(|o| o.status.is_terminal()).collect();
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        history
    }

    fn update_order_status(&mut self, id: &str, status: OrderStatus) -> StoreResult<bool> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        let from = order.status;
        order.status = status;
        self.persist(StorageKey::Orders)?;
        tracing::info!(order_id = %id, from = %from, to = %status, "Order status updated");
        Ok(true)
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn toggle_menu_item(&mut self, id: &str) -> StoreResult<bool> {
        let Some(item) = self.menu.find_mut(id) else {
            return Ok(false);
        };
        item.active = !item.active;
        self.persist(StorageKey::Menu)?;
        Ok(true)
    }

    fn update_menu_item(&mut self, id: &str, update: MenuItemUpdate) -> StoreResult<bool> {
        let Some(item) = self.menu.find_mut(id) else {
            return Ok(false);
        };
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(price) = update.price {
            item.price = price;
        }
        if let Some(active) = update.active {
            item.active = active;
        }
        self.persist(StorageKey::Menu)?;
        Ok(true)
    }

    fn delete_menu_item(&mut self, id: &str) -> StoreResult<bool> {
        if self.menu.remove(id).is_none() {
            return Ok(false);
        }
        self.persist(StorageKey::Menu)?;
        Ok(true)
    }

    fn reload(&mut self, key: StorageKey) -> StoreResult<()> {
        match key {
            StorageKey::Mesas => self.mesas = self.storage.load(key)?.unwrap_or_default(),
            StorageKey::Orders => self.orders = self.storage.load(key)?.unwrap_or_default(),
            StorageKey::Menu => self.menu = self.storage.load(key)?.unwrap_or_default(),
            StorageKey::AdminSession => self.session = self.storage.load(key)?,
        }
        Ok(())
    }

    fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    fn clear_session(&mut self) -> StoreResult<()> {
        self.session = None;
        self.persist(StorageKey::AdminSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::connected_pair;
    use rust_decimal::Decimal;

    fn ceviche(qty: u32) -> OrderItem {
        OrderItem::new(qty, "Ceviche", Decimal::new(625, 2))
    }

    #[test]
    fn test_place_order_seats_table_and_links_order() {
        let (_, mut customer) = connected_pair(4);
        let order = customer.place_order(2, vec![ceviche(2)]).unwrap().unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(1250, 2));
        let mesa = customer.get_table(2).unwrap();
        assert_eq!(mesa.status, MesaStatus::Occupied);
        assert!(mesa.session_start.is_some());
        assert_eq!(mesa.orders, vec![order.id.clone()]);
    }

    #[test]
    fn test_place_order_rejects_inactive_and_unknown_tables() {
        let (mut admin, mut customer) = connected_pair(4);
        admin.deactivate_table(1);
        admin.persist(StorageKey::Mesas).unwrap();
        assert!(customer.place_order(1, vec![ceviche(1)]).unwrap().is_none());
        assert!(customer.place_order(99, vec![ceviche(1)]).unwrap().is_none());
        assert!(customer.orders().is_empty());
    }

    #[test]
    fn test_place_order_rereads_orders_before_writing() {
        let (mut admin, mut customer) = connected_pair(4);
        let first = customer.place_order(1, vec![ceviche(1)]).unwrap().unwrap();
        admin.reload(StorageKey::Orders).unwrap();
        admin.update_order_status(&first.id, OrderStatus::Cancelled).unwrap();

        // The customer snapshot still holds the pending copy
        assert_eq!(customer.get_order(&first.id).unwrap().status, OrderStatus::Pending);
        customer.place_order(2, vec![ceviche(2)]).unwrap().unwrap();

        admin.reload(StorageKey::Orders).unwrap();
        assert_eq!(admin.get_order(&first.id).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(admin.orders().len(), 2);
    }

    #[test]
    fn test_other_context_sees_changes_only_after_reload() {
        let (mut admin, mut customer) = connected_pair(4);
        customer.place_order(3, vec![ceviche(1)]).unwrap();

        assert!(admin.active_orders().is_empty());
        admin.reload(StorageKey::Orders).unwrap();
        assert_eq!(admin.active_orders().len(), 1);
        // Tables were not reloaded
        assert_eq!(admin.get_table(3).unwrap().status, MesaStatus::Available);
    }

    #[test]
    fn test_table_mutators_need_explicit_persist() {
        let (mut admin, mut customer) = connected_pair(4);
        assert!(admin.deactivate_table(1));
        customer.reload(StorageKey::Mesas).unwrap();
        assert_eq!(customer.get_table(1).unwrap().status, MesaStatus::Available);

        admin.persist(StorageKey::Mesas).unwrap();
        customer.reload(StorageKey::Mesas).unwrap();
        assert_eq!(customer.get_table(1).unwrap().status, MesaStatus::Inactive);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut admin, _) = connected_pair(4);
        assert!(!admin.activate_table(42));
        assert!(!admin.update_order_status("nope", OrderStatus::Ready).unwrap());
        assert!(!admin.toggle_menu_item("nope").unwrap());
        assert!(!admin.delete_menu_item("nope").unwrap());
        assert_eq!(admin.bus().version(StorageKey::Orders), 0);
        assert_eq!(admin.bus().version(StorageKey::Menu), 0);
    }

    #[test]
    fn test_history_is_terminal_orders_newest_first() {
        let (mut admin, mut customer) = connected_pair(4);
        let first = customer.place_order(1, vec![ceviche(1)]).unwrap().unwrap();
        let second = customer.place_order(2, vec![ceviche(1)]).unwrap().unwrap();
        customer.place_order(3, vec![ceviche(1)]).unwrap();
        admin.reload(StorageKey::Orders).unwrap();

        admin.update_order_status(&first.id, OrderStatus::Cancelled).unwrap();
        admin.update_order_status(&second.id, OrderStatus::Ready).unwrap();

        let history: Vec<&str> = admin.order_history().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(history.len(), 2);
        assert!(history.contains(&first.id.as_str()));
        assert!(history.contains(&second.id.as_str()));
        // Ready stays in the active list
        assert_eq!(admin.active_orders().len(), 2);
    }

    #[test]
    fn test_concurrent_full_collection_writes_last_one_wins() {
        let (mut admin, mut customer) = connected_pair(4);
        // Both contexts start from the same snapshot and write the same key
        admin.deactivate_table(1);
        customer.seat_table(2).unwrap();
        admin.persist(StorageKey::Mesas).unwrap();

        customer.reload(StorageKey::Mesas).unwrap();
        // Admin wrote last with a stale view of table 2
        assert_eq!(customer.get_table(1).unwrap().status, MesaStatus::Inactive);
        assert_eq!(customer.get_table(2).unwrap().status, MesaStatus::Available);
    }

    #[test]
    fn test_session_login_and_clear() {
        let (mut admin, mut customer) = connected_pair(4);
        assert!(admin.session().is_none());
        customer.login("marta").unwrap();
        admin.reload(StorageKey::AdminSession).unwrap();
        assert_eq!(admin.session().unwrap().username, "marta");

        admin.clear_session().unwrap();
        customer.reload(StorageKey::AdminSession).unwrap();
        assert!(customer.session().is_none());
    }
}
