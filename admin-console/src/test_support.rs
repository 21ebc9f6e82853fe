//! Test fixtures shared by unit tests

use rust_decimal::Decimal;
use shared::{MesaId, Order, OrderItem, OrderStatus, StorageKey};

use crate::store::{AppStore, SharedStorage, StoreBus, seed_defaults};

/// Fixed creation time for sample orders
pub const BASE_TIME: i64 = 1_760_000_000_000;

/// Two contexts over the same seeded storage and bus
pub fn connected_pair(table_count: u32) -> (AppStore, AppStore) {
    let storage = SharedStorage::open_in_memory().unwrap();
    seed_defaults(&storage, table_count).unwrap();
    let bus = StoreBus::new();
    let admin = AppStore::connect(storage.clone(), bus.clone()).unwrap();
    let customer = AppStore::connect(storage, bus).unwrap();
    (admin, customer)
}

pub fn item(quantity: u32, name: &str, cents: i64) -> OrderItem {
    OrderItem::new(quantity, name, Decimal::new(cents, 2))
}

/// `2x Ceviche`, total 12.50
pub fn sample_order(id: &str, mesa_id: MesaId, status: OrderStatus) -> Order {
    let mut order = Order::new(id, mesa_id, vec![item(2, "Ceviche", 625)], BASE_TIME);
    order.status = status;
    order
}

/// Admin context over a storage pre-loaded with `orders` and five tables
pub fn store_with_orders(orders: Vec<Order>) -> AppStore {
    store_pair_with_orders(orders).0
}

pub fn store_pair_with_orders(orders: Vec<Order>) -> (AppStore, AppStore) {
    let storage = SharedStorage::open_in_memory().unwrap();
    seed_defaults(&storage, 5).unwrap();
    storage.save(StorageKey::Orders, &orders).unwrap();
    let bus = StoreBus::new();
    let admin = AppStore::connect(storage.clone(), bus.clone()).unwrap();
    let customer = AppStore::connect(storage, bus).unwrap();
    (admin, customer)
}
