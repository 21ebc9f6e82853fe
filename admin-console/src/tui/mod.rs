//! 终端界面
//!
//! [`TuiPresenter`] 实现 [`Presenter`]，把视图模型保存在 [`Screen`] 里，
//! 由 [`run`] 的事件循环统一绘制。确认框是阻塞的：在回答之前
//! 不处理任何其他事件。

mod screen;
mod ui;

pub use screen::{KeyOutcome, Screen};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shared::Notification;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::console::{AdminConsole, ConsoleEvent, Flow, Presenter};
use crate::core::ConsoleResult;
use crate::store::DataStore;
use crate::view::{HistoryRow, MenuView, OrderList, TableCard, TableDetail, ViewName};

/// Key polling interval of the event loop
const INPUT_POLL: Duration = Duration::from_millis(100);

pub struct TuiPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: Screen,
}

impl TuiPresenter {
    /// Enter raw mode and the alternate screen
    ///
    /// The terminal is restored when the presenter is dropped.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            screen: Screen::default(),
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn draw(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal.draw(|f| ui::draw(f, screen, None))?;
        Ok(())
    }

    fn on_key(&mut self, code: KeyCode) -> KeyOutcome {
        self.screen.on_key(code)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<bool> {
        let screen = &self.screen;
        self.terminal.draw(|f| ui::draw(f, screen, Some(prompt)))?;
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('y' | 's') | KeyCode::Enter => return Ok(true),
                    KeyCode::Char('n') | KeyCode::Esc => return Ok(false),
                    _ => {}
                }
            }
        }
    }
}

impl Drop for TuiPresenter {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Presenter for TuiPresenter {
    fn show_view(&mut self, view: ViewName, title: &str) {
        self.screen.show_view(view, title);
    }

    fn render_tables(&mut self, cards: Vec<TableCard>) {
        self.screen.tables = cards;
        self.screen.clamp_cursor();
    }

    fn render_orders(&mut self, orders: OrderList) {
        self.screen.orders = Some(orders);
        self.screen.clamp_cursor();
    }

    fn render_menu(&mut self, menu: MenuView) {
        self.screen.menu = Some(menu);
        self.screen.clamp_cursor();
    }

    fn render_history(&mut self, rows: Vec<HistoryRow>) {
        self.screen.history = rows;
        self.screen.clamp_cursor();
    }

    fn show_table_detail(&mut self, detail: TableDetail) {
        self.screen.detail = Some(detail);
    }

    fn hide_table_detail(&mut self) {
        self.screen.detail = None;
    }

    fn set_clock(&mut self, text: String) {
        self.screen.clock = text;
    }

    fn set_user(&mut self, username: &str) {
        self.screen.user = username.to_string();
    }

    fn notify(&mut self, notification: Notification) {
        self.screen.notify(notification);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        match self.ask(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(error = %e, "Confirm prompt failed, treating as declined");
                false
            }
        }
    }
}

/// 事件循环：绘制、处理后台事件、读取按键
///
/// Returns on logout or `q`. Handler errors are logged and shown as a toast;
/// only terminal I/O errors end the loop.
pub async fn run<S: DataStore>(
    console: &mut AdminConsole<S, TuiPresenter>,
    events: &mut mpsc::Receiver<ConsoleEvent>,
) -> ConsoleResult<()> {
    loop {
        console.presenter_mut().draw()?;

        while let Ok(event) = events.try_recv() {
            if apply(console, event) == Flow::Exit {
                return Ok(());
            }
        }

        if !event::poll(INPUT_POLL)? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        match console.presenter_mut().on_key(key.code) {
            KeyOutcome::Command(command) => {
                if apply(console, command.into()) == Flow::Exit {
                    return Ok(());
                }
            }
            KeyOutcome::Quit => {
                tracing::info!("Console closed");
                return Ok(());
            }
            KeyOutcome::None => {}
        }
    }
}

fn apply<S: DataStore>(console: &mut AdminConsole<S, TuiPresenter>, event: ConsoleEvent) -> Flow {
    match console.handle_event(event) {
        Ok(flow) => flow,
        Err(e) => {
            tracing::error!(error = %e, "Console event failed");
            console.presenter_mut().notify(Notification::error(e.to_string()));
            Flow::Continue
        }
    }
}
