//! 顾客端模拟器
//!
//! 第二个存储上下文，定期让客人入座并下单，用于演示管理端的实时同步。

use rand::Rng;
use rand::seq::SliceRandom;
use shared::{MenuSection, MesaStatus, Order, OrderItem, StorageKey};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::store::{AppStore, DataStore, StoreResult};

/// Notes customers sometimes leave on a line
const NOTES: [&str; 3] = ["sin cebolla", "bien picante", "para llevar"];

/// Place one order on a random available table with random active dishes
///
/// Returns `None` when no table is free or nothing is on the menu.
pub fn simulate_once(store: &mut AppStore) -> StoreResult<Option<Order>> {
    store.reload(StorageKey::Mesas)?;
    store.reload(StorageKey::Menu)?;

    let mut rng = rand::thread_rng();
    let free: Vec<u32> = store
        .list_tables()
        .iter()
        .filter(|m| m.status == MesaStatus::Available)
        .map(|m| m.id)
        .collect();
    let Some(&mesa_id) = free.choose(&mut rng) else {
        return Ok(None);
    };

    let dishes: Vec<_> = MenuSection::ALL
        .iter()
        .flat_map(|s| store.menu().section(*s))
        .filter(|item| item.active)
        .collect();
    if dishes.is_empty() {
        return Ok(None);
    }

    let lines = rng.gen_range(1..=3.min(dishes.len()));
    let picked: Vec<_> = dishes.choose_multiple(&mut rng, lines).collect();
    let items: Vec<OrderItem> = picked
        .into_iter()
        .map(|dish| {
            let item = OrderItem::new(rng.gen_range(1..=2), dish.name.clone(), dish.price);
            if rng.gen_bool(0.2) {
                item.with_notes(NOTES[rng.gen_range(0..NOTES.len())])
            } else {
                item
            }
        })
        .collect();

    store.place_order(mesa_id, items)
}

/// Run until cancelled, one order per `period`
pub async fn run_customer_simulator(mut store: AppStore, period: Duration, token: CancellationToken) {
    tracing::info!(period_ms = period.as_millis() as u64, "Customer simulator started");
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(period) => {}
        }
        match simulate_once(&mut store) {
            Ok(Some(order)) => {
                tracing::debug!(order_id = %order.id, mesa_id = order.mesa_id, "Simulated order");
            }
            Ok(None) => tracing::debug!("No free table for simulated order"),
            Err(e) => tracing::warn!(error = %e, "Simulated order failed"),
        }
    }
}
