//! Shared types for the Sazón admin console
//!
//! Domain models and store-event types used by the admin console and by any
//! other screen (customer ordering, kitchen) that shares the same store.

pub mod message;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use message::{Notification, NotificationLevel, StorageKey, StoreEvent};
pub use models::{AdminSession, Menu, MenuItem, MenuSection, Mesa, MesaStatus, Order, OrderItem, OrderStatus};
pub use types::{MesaId, Timestamp};
