//! 终端界面的本地状态与按键映射
//!
//! 保存最近一次渲染的视图模型和光标位置。按键先在这里翻译成
//! [`AdminCommand`]，再交给控制台执行。

use crossterm::event::KeyCode;
use rust_decimal::Decimal;
use shared::Notification;
use shared::models::MenuItemUpdate;
use std::time::{Duration, Instant};

use crate::console::AdminCommand;
use crate::view::{
    HistoryRow, MenuItemRow, MenuView, OrderAction, OrderCard, OrderList, TableCard, TableDetail,
    ViewName,
};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Price step for `+` / `-` in the menu view
pub const PRICE_STEP: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// What a key press means for the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Run a console command
    Command(AdminCommand),
    /// Leave the console without logging out
    Quit,
    /// Handled locally (cursor) or ignored
    None,
}

#[derive(Debug)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct Screen {
    pub view: ViewName,
    pub title: String,
    pub user: String,
    pub clock: String,
    pub toast: Option<Toast>,
    pub tables: Vec<TableCard>,
    pub orders: Option<OrderList>,
    pub menu: Option<MenuView>,
    pub history: Vec<HistoryRow>,
    pub detail: Option<TableDetail>,
    /// Cursor in the visible list
    pub cursor: usize,
}

impl Screen {
    pub fn show_view(&mut self, view: ViewName, title: &str) {
        if self.view != view {
            self.cursor = 0;
        }
        self.view = view;
        self.title = title.to_string();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toast = Some(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }

    /// Toast still within its display time
    pub fn visible_toast(&self) -> Option<&Notification> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < TOAST_TTL)
            .map(|t| &t.notification)
    }

    pub fn order_cards(&self) -> &[OrderCard] {
        self.orders.as_ref().map(OrderList::cards).unwrap_or(&[])
    }

    /// Both menu sections flattened in display order
    pub fn menu_rows(&self) -> Vec<&MenuItemRow> {
        self.menu
            .iter()
            .flat_map(|m| m.sections.iter())
            .flat_map(|s| s.items.iter())
            .collect()
    }

    /// Rows in the visible list
    pub fn row_count(&self) -> usize {
        match self.view {
            ViewName::Mesas => self.tables.len(),
            ViewName::Pedidos => self.order_cards().len(),
            ViewName::Menu => self.menu_rows().len(),
            ViewName::Historial => self.history.len(),
        }
    }

    /// Keep the cursor inside the list after a re-render
    pub fn clamp_cursor(&mut self) {
        let count = self.row_count();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    pub fn on_key(&mut self, code: KeyCode) -> KeyOutcome {
        // 弹窗打开时只响应弹窗按键
        if self.detail.is_some() {
            return match code {
                KeyCode::Char('t') => KeyOutcome::Command(AdminCommand::ToggleTable),
                KeyCode::Esc | KeyCode::Enter => KeyOutcome::Command(AdminCommand::CloseTable),
                _ => KeyOutcome::None,
            };
        }

        let command = match code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Some(AdminCommand::SelectView(ViewName::ALL[index]))
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.row_count() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::F(5) => Some(AdminCommand::RefreshOrders),
            KeyCode::Char('l') => Some(AdminCommand::Logout),
            KeyCode::Enter if self.view == ViewName::Mesas => self
                .tables
                .get(self.cursor)
                .map(|card| AdminCommand::OpenTable(card.id)),
            KeyCode::Char('c') => self.order_command(OrderAction::Confirm),
            KeyCode::Char('x') => self.order_command(OrderAction::Reject),
            KeyCode::Char('r') => self.order_command(OrderAction::MarkReady),
            KeyCode::Char('m') => self
                .selected_menu_row()
                .map(|row| AdminCommand::ToggleMenuItem(row.id.clone())),
            KeyCode::Char('d') => self
                .selected_menu_row()
                .map(|row| AdminCommand::DeleteMenuItem(row.id.clone())),
            KeyCode::Char('+') => self.price_command(PRICE_STEP),
            KeyCode::Char('-') => self.price_command(-PRICE_STEP),
            _ => None,
        };

        command.map_or(KeyOutcome::None, KeyOutcome::Command)
    }

    /// Only actions the card actually offers are sent
    fn order_command(&self, action: OrderAction) -> Option<AdminCommand> {
        if self.view != ViewName::Pedidos {
            return None;
        }
        let card = self.order_cards().get(self.cursor)?;
        if !card.actions.contains(&action) {
            return None;
        }
        let id = card.id.clone();
        Some(match action {
            OrderAction::Confirm => AdminCommand::ApproveOrder(id),
            OrderAction::Reject => AdminCommand::RejectOrder(id),
            OrderAction::MarkReady => AdminCommand::MarkOrderReady(id),
        })
    }

    fn selected_menu_row(&self) -> Option<&MenuItemRow> {
        if self.view != ViewName::Menu {
            return None;
        }
        self.menu_rows().get(self.cursor).copied()
    }

    fn price_command(&self, delta: Decimal) -> Option<AdminCommand> {
        let row = self.selected_menu_row()?;
        let price = row.amount + delta;
        if price.is_sign_negative() {
            return None;
        }
        Some(AdminCommand::EditMenuItem {
            id: row.id.clone(),
            update: MenuItemUpdate {
                price: Some(price),
                ..Default::default()
            },
        })
    }
}
