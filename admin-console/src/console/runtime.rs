//! 后台任务：时钟、订单轮询、存储变更监听
//!
//! ```text
//! clock (1s)   ──try_send──┐
//! poll  (5s)   ──try_send──┼──► mpsc<ConsoleEvent> ──► event loop ──► AdminConsole
//! StoreBus ──► listener ───┘ send (不丢弃)
//! ```
//!
//! 时钟和轮询是 best-effort，通道满时直接丢弃；存储变更必须送达。

use shared::{StorageKey, StoreEvent};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::ConsoleEvent;
use crate::core::{BackgroundTasks, Config, TaskKind};
use crate::store::StoreBus;

/// Capacity of the console event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Keys a lagging listener re-announces so the console resynchronises
const RESYNC_KEYS: [StorageKey; 3] = [StorageKey::Mesas, StorageKey::Orders, StorageKey::Menu];

pub fn event_channel() -> (mpsc::Sender<ConsoleEvent>, mpsc::Receiver<ConsoleEvent>) {
    mpsc::channel(EVENT_CHANNEL_CAPACITY)
}

/// Register the clock, the order poll and the sync listener
pub fn spawn_console_tasks(
    tasks: &mut BackgroundTasks,
    config: &Config,
    bus: &StoreBus,
    context: Uuid,
    tx: mpsc::Sender<ConsoleEvent>,
) {
    spawn_ticker(tasks, "clock", config.clock_tick(), ConsoleEvent::ClockTick, tx.clone());
    spawn_ticker(tasks, "order_poll", config.order_poll(), ConsoleEvent::PollOrders, tx.clone());
    spawn_sync_listener(tasks, bus, context, tx);
}

/// Periodic best-effort event
pub fn spawn_ticker(
    tasks: &mut BackgroundTasks,
    name: &'static str,
    period: Duration,
    event: ConsoleEvent,
    tx: mpsc::Sender<ConsoleEvent>,
) {
    let token = tasks.shutdown_token();
    tasks.spawn(name, TaskKind::Periodic, async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    match tx.try_send(event.clone()) {
                        Ok(()) => {}
                        Err(mpsc::error::TrySendError::Full(_)) => {
                            tracing::trace!(task = name, "Console busy, tick dropped");
                        }
                        Err(mpsc::error::TrySendError::Closed(_)) => break,
                    }
                }
            }
        }
    });
}

/// Forward store changes made by other contexts
pub fn spawn_sync_listener(
    tasks: &mut BackgroundTasks,
    bus: &StoreBus,
    context: Uuid,
    tx: mpsc::Sender<ConsoleEvent>,
) {
    let token = tasks.shutdown_token();
    let rx = bus.subscribe();
    tasks.spawn("sync_listener", TaskKind::Listener, async move {
        run_sync_listener(rx, context, tx, token).await;
    });
}

async fn run_sync_listener(
    mut rx: broadcast::Receiver<StoreEvent>,
    context: Uuid,
    tx: mpsc::Sender<ConsoleEvent>,
    token: CancellationToken,
) {
    tracing::info!(context = %context, "Sync listener started");
    loop {
        let received = tokio::select! {
            _ = token.cancelled() => break,
            received = rx.recv() => received,
        };

        let events = match received {
            Ok(event) if event.is_foreign(context) => vec![event],
            Ok(_) => continue,
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "Sync listener lagged, resynchronising all collections");
                RESYNC_KEYS
                    .into_iter()
                    .map(|key| StoreEvent::new(key, Uuid::nil(), 0))
                    .collect()
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Store bus closed, sync listener stopping");
                break;
            }
        };

        for event in events {
            if tx.send(ConsoleEvent::StoreChanged(event)).await.is_err() {
                tracing::debug!("Console event channel closed");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listener_drops_own_writes() {
        let bus = StoreBus::new();
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let (tx, mut rx) = event_channel();
        let mut tasks = BackgroundTasks::new();
        spawn_sync_listener(&mut tasks, &bus, me, tx);

        bus.publish(StorageKey::Mesas, me);
        bus.publish(StorageKey::Orders, other);

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match event {
            ConsoleEvent::StoreChanged(e) => {
                assert_eq!(e.key, StorageKey::Orders);
                assert_eq!(e.origin, other);
            }
            unexpected => panic!("unexpected event {unexpected:?}"),
        }
        assert!(rx.try_recv().is_err());
        tasks.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_emits_after_each_period() {
        let (tx, mut rx) = event_channel();
        let mut tasks = BackgroundTasks::new();
        spawn_ticker(&mut tasks, "poll", Duration::from_secs(5), ConsoleEvent::PollOrders, tx);

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(rx.recv().await, Some(ConsoleEvent::PollOrders));
        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(rx.recv().await, Some(ConsoleEvent::PollOrders));
        tasks.shutdown().await;
    }

    #[tokio::test]
    async fn test_lagged_listener_requests_resync() {
        let bus = StoreBus::with_capacity(1);
        let (tx, mut rx) = event_channel();
        let rx_bus = bus.subscribe();
        let other = Uuid::new_v4();
        bus.publish(StorageKey::Orders, other);
        bus.publish(StorageKey::Orders, other);
        bus.publish(StorageKey::Orders, other);

        let token = CancellationToken::new();
        let handle = tokio::spawn(run_sync_listener(rx_bus, Uuid::new_v4(), tx, token.clone()));

        let mut keys = Vec::new();
        for _ in 0..3 {
            if let Some(ConsoleEvent::StoreChanged(e)) = rx.recv().await {
                keys.push(e.key);
            }
        }
        assert_eq!(keys, RESYNC_KEYS.to_vec());
        token.cancel();
        handle.await.unwrap();
    }
}
