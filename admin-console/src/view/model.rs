//! View models
//!
//! Plain data handed to the presenter. Labels and money are already
//! formatted; the presenter only lays them out.

use rust_decimal::Decimal;
use shared::{MenuSection, MesaId, MesaStatus, OrderStatus};

/// Table grid card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCard {
    pub id: MesaId,
    pub status: MesaStatus,
    pub status_label: String,
    /// Elapsed session time, `-` unless occupied
    pub elapsed: String,
}

/// Read-only summary shown in the table popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDetail {
    pub number: MesaId,
    pub status: MesaStatus,
    pub status_label: String,
    pub order_count: usize,
}

/// 订单卡片上的操作按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Confirm,
    Reject,
    MarkReady,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirm => "Confirmar Pedido",
            Self::Reject => "Rechazar",
            Self::MarkReady => "Marcar como Listo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// `2x Ceviche`
    pub text: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub id: String,
    /// `Mesa 5`
    pub mesa_label: String,
    pub created_at: String,
    pub status: OrderStatus,
    pub status_label: String,
    pub lines: Vec<OrderLine>,
    pub total: String,
    pub actions: Vec<OrderAction>,
}

/// Active order list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderList {
    /// Empty-state indicator, list cleared
    Empty,
    Cards(Vec<OrderCard>),
}

impl OrderList {
    pub fn cards(&self) -> &[OrderCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// 菜品操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemAction {
    Toggle,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemRow {
    pub id: String,
    pub name: String,
    pub price: String,
    /// Unformatted price, the starting point for edits
    pub amount: Decimal,
    pub active: bool,
    pub actions: [MenuItemAction; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSectionView {
    pub section: MenuSection,
    pub title: String,
    pub items: Vec<MenuItemRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub sections: Vec<MenuSectionView>,
}

/// Finished or rejected order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub mesa_label: String,
    pub created_at: String,
    pub status: OrderStatus,
    pub status_label: String,
    pub total: String,
}
