//! Presenter that records every call, with scripted confirm answers

use shared::Notification;
use std::collections::VecDeque;

use super::Presenter;
use crate::view::{HistoryRow, MenuView, OrderList, TableCard, TableDetail, ViewName};

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Tables(Vec<TableCard>),
    Orders(OrderList),
    Menu(MenuView),
    History(Vec<HistoryRow>),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub views: Vec<(ViewName, String)>,
    pub renders: Vec<Rendered>,
    pub notifications: Vec<Notification>,
    pub prompts: Vec<String>,
    /// Answers for upcoming prompts; an empty queue answers "no"
    pub answers: VecDeque<bool>,
    pub detail: Option<TableDetail>,
    pub clock: Option<String>,
    pub user: Option<String>,
}

impl RecordingPresenter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.views.clear();
        self.renders.clear();
        self.notifications.clear();
        self.prompts.clear();
    }

    pub fn last_orders(&self) -> Option<&OrderList> {
        self.renders.iter().rev().find_map(|r| match r {
            Rendered::Orders(list) => Some(list),
            _ => None,
        })
    }

    pub fn last_tables(&self) -> Option<&[TableCard]> {
        self.renders.iter().rev().find_map(|r| match r {
            Rendered::Tables(cards) => Some(cards.as_slice()),
            _ => None,
        })
    }

    pub fn order_renders(&self) -> usize {
        self.renders.iter().filter(|r| matches!(r, Rendered::Orders(_))).count()
    }

    pub fn table_renders(&self) -> usize {
        self.renders.iter().filter(|r| matches!(r, Rendered::Tables(_))).count()
    }
}

impl Presenter for RecordingPresenter {
    fn show_view(&mut self, view: ViewName, title: &str) {
        self.views.push((view, title.to_string()));
    }

    fn render_tables(&mut self, cards: Vec<TableCard>) {
        self.renders.push(Rendered::Tables(cards));
    }

    fn render_orders(&mut self, orders: OrderList) {
        self.renders.push(Rendered::Orders(orders));
    }

    fn render_menu(&mut self, menu: MenuView) {
        self.renders.push(Rendered::Menu(menu));
    }

    fn render_history(&mut self, rows: Vec<HistoryRow>) {
        self.renders.push(Rendered::History(rows));
    }

    fn show_table_detail(&mut self, detail: TableDetail) {
        self.detail = Some(detail);
    }

    fn hide_table_detail(&mut self) {
        self.detail = None;
    }

    fn set_clock(&mut self, text: String) {
        self.clock = Some(text);
    }

    fn set_user(&mut self, username: &str) {
        self.user = Some(username.to_string());
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
