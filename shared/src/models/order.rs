//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{MesaId, Timestamp};

/// 订单状态
///
/// ```text
/// pending ──► confirmed ──► ready
///    └──────► cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// 等待确认
    Pending,
    /// 已确认，厨房制作中
    Confirmed,
    /// 可上菜
    Ready,
    /// 已拒绝
    Cancelled,
}

impl OrderStatus {
    /// Shown in the active order list
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Ready)
    }

    /// No further transitions are issued from the admin console
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Cancelled)
    }

    /// 界面显示文本
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Esperando Confirmación",
            Self::Confirmed => "En Cocina",
            Self::Ready => "Listo para Servir",
            Self::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Ready => write!(f, "ready"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// 订单行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: u32,
    pub name: String,
    /// Unit price
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Free-text note from the customer ("sin cebolla")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn new(quantity: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            quantity,
            name: name.into(),
            price,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub mesa_id: MesaId,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    /// New pending order; the total is the sum of the line totals
    pub fn new(id: impl Into<String>, mesa_id: MesaId, items: Vec<OrderItem>, created_at: Timestamp) -> Self {
        let total = items.iter().map(OrderItem::line_total).sum();
        Self {
            id: id.into(),
            mesa_id,
            status: OrderStatus::Pending,
            created_at,
            items,
            total,
        }
    }
}
