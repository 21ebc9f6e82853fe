//! Admin console controller
//!
//! # 架构
//!
//! ```text
//!  Presenter (TUI / tests)
//!      ▲  view models           │ AdminCommand
//!      │                        ▼
//!  ┌───────────────── AdminConsole ─────────────────┐
//!  │ router (select_view)   actions   sync / clock  │
//!  │            ConsoleState (current view, mesa)   │
//!  └──────────────────────┬─────────────────────────┘
//!                         │ DataStore
//!                         ▼
//!                      AppStore ──► SharedStorage / StoreBus
//! ```
//!
//! 所有处理函数在同一个事件循环里顺序执行，执行完才处理下一个事件。

mod actions;
mod command;
mod presenter;
pub mod runtime;
mod state;
mod sync;

#[cfg(test)]
mod recording;

pub use command::{AdminCommand, ConsoleEvent, Flow};
pub use presenter::Presenter;
pub use state::ConsoleState;

use shared::Notification;
use shared::util::now_millis;

use crate::core::{ConsoleError, ConsoleResult};
use crate::store::DataStore;
use crate::utils::Formatter;
use crate::view::{self, ViewName, title_for};

pub struct AdminConsole<S: DataStore, P: Presenter> {
    store: S,
    presenter: P,
    fmt: Formatter,
    state: ConsoleState,
}

impl<S: DataStore, P: Presenter> AdminConsole<S, P> {
    pub fn new(store: S, presenter: P, fmt: Formatter) -> Self {
        Self {
            store,
            presenter,
            fmt,
            state: ConsoleState::default(),
        }
    }

    /// 启动：检查会话，显示用户名、时钟和默认视图
    ///
    /// Fails with [`ConsoleError::NoSession`] when nobody is logged in.
    pub fn start(&mut self) -> ConsoleResult<()> {
        let username = match self.store.session() {
            Some(session) => session.username.clone(),
            None => {
                tracing::warn!("No admin session, login required");
                return Err(ConsoleError::NoSession);
            }
        };
        tracing::info!(user = %username, "Admin console started");
        self.presenter.set_user(&username);
        self.tick_clock();
        self.select_view(ViewName::default());
        Ok(())
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn current_view(&self) -> ViewName {
        self.state.current_view
    }

    // ========== Router ==========

    /// 切换视图
    ///
    /// Shows the view's panel and title, then invokes exactly one renderer.
    pub fn select_view(&mut self, view: ViewName) {
        tracing::debug!(from = %self.state.current_view, to = %view, "Select view");
        self.state.current_view = view;
        self.presenter.show_view(view, view.title());
        self.render_view(view);
    }

    /// 按名称切换视图，未知名称返回错误且不改变当前视图 (只弹出提示)
    pub fn select_view_named(&mut self, name: &str) -> ConsoleResult<()> {
        let view: ViewName = match name.parse() {
            Ok(view) => view,
            Err(e) => {
                self.presenter.notify(Notification::warning(format!(
                    "{}: vista desconocida \"{name}\"",
                    title_for(name)
                )));
                return Err(e);
            }
        };
        self.select_view(view);
        Ok(())
    }

    fn render_view(&mut self, view: ViewName) {
        match view {
            ViewName::Mesas => self.render_tables(),
            ViewName::Pedidos => self.render_orders(),
            ViewName::Menu => self.render_menu(),
            ViewName::Historial => self.render_history(),
        }
    }

    // ========== Renderers ==========

    pub fn render_tables(&mut self) {
        let cards = view::tables::render_tables(&self.store, &self.fmt, now_millis());
        self.presenter.render_tables(cards);
    }

    pub fn render_orders(&mut self) {
        let orders = view::orders::render_orders(&self.store, &self.fmt);
        self.presenter.render_orders(orders);
    }

    pub fn render_menu(&mut self) {
        let menu = view::menu::render_menu(&self.store, &self.fmt);
        self.presenter.render_menu(menu);
    }

    pub fn render_history(&mut self) {
        let rows = view::history::render_history(&self.store, &self.fmt);
        self.presenter.render_history(rows);
    }

    // ========== Dispatch ==========

    /// 处理一个事件直到完成
    pub fn handle_event(&mut self, event: ConsoleEvent) -> ConsoleResult<Flow> {
        match event {
            ConsoleEvent::Command(command) => return self.dispatch(command),
            ConsoleEvent::ClockTick => self.tick_clock(),
            ConsoleEvent::PollOrders => self.refresh_orders(),
            ConsoleEvent::StoreChanged(event) => self.on_store_changed(&event)?,
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, command: AdminCommand) -> ConsoleResult<Flow> {
        match command {
            AdminCommand::SelectView(view) => self.select_view(view),
            AdminCommand::OpenTable(id) => self.open_table_modal(id),
            AdminCommand::CloseTable => self.close_table_modal(),
            AdminCommand::ToggleTable => self.toggle_table()?,
            AdminCommand::ApproveOrder(id) => self.approve_order(&id)?,
            AdminCommand::RejectOrder(id) => self.reject_order(&id)?,
            AdminCommand::MarkOrderReady(id) => self.mark_order_ready(&id)?,
            AdminCommand::ToggleMenuItem(id) => self.toggle_menu_item(&id)?,
            AdminCommand::EditMenuItem { id, update } => self.edit_menu_item(&id, update)?,
            AdminCommand::DeleteMenuItem(id) => self.delete_menu_item(&id)?,
            AdminCommand::RefreshOrders => self.render_orders(),
            AdminCommand::Logout => {
                if self.logout()? {
                    return Ok(Flow::Exit);
                }
            }
        }
        Ok(Flow::Continue)
    }
}
