//! 控制台事件
//!
//! 所有输入 (用户操作、时钟、轮询、存储变更) 都变成 [`ConsoleEvent`]，
//! 由事件循环逐个交给 [`super::AdminConsole::handle_event`] 处理完毕。

use shared::models::MenuItemUpdate;
use shared::{MesaId, StoreEvent};

use crate::view::ViewName;

/// Operations exposed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    SelectView(ViewName),
    OpenTable(MesaId),
    CloseTable,
    ToggleTable,
    ApproveOrder(String),
    RejectOrder(String),
    MarkOrderReady(String),
    ToggleMenuItem(String),
    EditMenuItem { id: String, update: MenuItemUpdate },
    DeleteMenuItem(String),
    RefreshOrders,
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    Command(AdminCommand),
    /// 时钟刷新
    ClockTick,
    /// 订单轮询
    PollOrders,
    /// 其他上下文写入了存储
    StoreChanged(StoreEvent),
}

impl From<AdminCommand> for ConsoleEvent {
    fn from(command: AdminCommand) -> Self {
        ConsoleEvent::Command(command)
    }
}

/// What the event loop does after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Session ended (logout)
    Exit,
}
