//! 展示层接口
//!
//! 控制台只产出视图模型，具体如何绘制由实现方决定
//! (终端界面、测试中的记录器)。

use shared::Notification;

use crate::view::{HistoryRow, MenuView, OrderList, TableCard, TableDetail, ViewName};

pub trait Presenter {
    /// Hide every panel, show the one for `view`, set the header title
    fn show_view(&mut self, view: ViewName, title: &str);

    /// Replace the whole table grid
    fn render_tables(&mut self, cards: Vec<TableCard>);

    /// Replace the whole order list (or show the empty state)
    fn render_orders(&mut self, orders: OrderList);

    fn render_menu(&mut self, menu: MenuView);

    fn render_history(&mut self, rows: Vec<HistoryRow>);

    fn show_table_detail(&mut self, detail: TableDetail);

    fn hide_table_detail(&mut self);

    fn set_clock(&mut self, text: String);

    fn set_user(&mut self, username: &str);

    /// Advisory toast, never blocks
    fn notify(&mut self, notification: Notification);

    /// Blocking yes/no prompt; nothing else runs until it is answered
    fn confirm(&mut self, prompt: &str) -> bool;
}
