use ratatui::{prelude::*, widgets::*};
use shared::{MesaStatus, NotificationLevel, OrderStatus};

use super::screen::Screen;
use crate::view::{OrderList, ViewName};

const HELP: &str = " 1-4 vista · ↑↓ mover · Enter abrir · c/x/r pedido · m/d/+/- menú · F5 refrescar · l salir sesión · q cerrar ";

pub fn draw(f: &mut Frame, screen: &Screen, prompt: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // View
            Constraint::Length(1), // Toast / help
        ])
        .split(f.area());

    draw_header(f, screen, chunks[0]);
    draw_tabs(f, screen, chunks[1]);

    match screen.view {
        ViewName::Mesas => draw_tables(f, screen, chunks[2]),
        ViewName::Pedidos => draw_orders(f, screen, chunks[2]),
        ViewName::Menu => draw_menu(f, screen, chunks[2]),
        ViewName::Historial => draw_history(f, screen, chunks[2]),
    }

    draw_footer(f, screen, chunks[3]);

    if let Some(detail) = &screen.detail {
        let area = centered(f.area(), 40, 9);
        let text = vec![
            Line::from(vec![
                Span::raw("Estado: "),
                Span::styled(&detail.status_label, table_style(detail.status)),
            ]),
            Line::from(format!("Pedidos: {}", detail.order_count)),
            Line::raw(""),
            Line::styled("t activar/desactivar · Esc cerrar", Style::default().fg(Color::DarkGray)),
        ];
        let popup = Paragraph::new(text).block(
            Block::bordered()
                .title(format!(" Mesa {} ", detail.number))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }

    if let Some(prompt) = prompt {
        let area = centered(f.area(), 50, 6);
        let text = vec![
            Line::styled(prompt, Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled("y / Enter = sí    n / Esc = no", Style::default().fg(Color::DarkGray)),
        ];
        let popup = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Confirmar ")
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

fn draw_header(f: &mut Frame, screen: &Screen, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" La Sazón Manaba ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        Span::styled(&screen.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(&screen.user, Style::default().fg(Color::Green)),
        Span::raw(" | "),
        Span::styled(&screen.clock, Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::bordered().border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, screen: &Screen, area: Rect) {
    let titles: Vec<String> = ViewName::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{} {}", i + 1, v.title()))
        .collect();
    let selected = ViewName::ALL.iter().position(|v| *v == screen.view).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::bordered())
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_tables(f: &mut Frame, screen: &Screen, area: Rect) {
    let items: Vec<ListItem> = screen
        .tables
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("Mesa {:>2}  ", card.id)),
                Span::styled(format!("{:<12}", card.status_label), table_style(card.status)),
                Span::raw(format!(" {}", card.elapsed)),
            ]))
        })
        .collect();
    render_list(f, area, " Mesas ", items, screen.cursor);
}

fn draw_orders(f: &mut Frame, screen: &Screen, area: Rect) {
    if matches!(screen.orders, None | Some(OrderList::Empty)) {
        let empty = Paragraph::new("No hay pedidos activos")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::bordered().title(" Pedidos "));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = screen
        .order_cards()
        .iter()
        .map(|card| {
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{} ", card.mesa_label), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{}  ", card.created_at)),
                Span::styled(&card.status_label, order_style(card.status)),
                Span::raw(format!("  Total: {}", card.total)),
            ])];
            for line in &card.lines {
                lines.push(Line::raw(format!("   {}", line.text)));
                if let Some(note) = &line.note {
                    lines.push(Line::styled(format!("     Nota: {note}"), Style::default().fg(Color::DarkGray)));
                }
            }
            if !card.actions.is_empty() {
                let labels: Vec<&str> = card.actions.iter().map(|a| a.label()).collect();
                lines.push(Line::styled(format!("   [{}]", labels.join("] [")), Style::default().fg(Color::Cyan)));
            }
            ListItem::new(lines)
        })
        .collect();
    render_list(f, area, " Pedidos ", items, screen.cursor);
}

fn draw_menu(f: &mut Frame, screen: &Screen, area: Rect) {
    let mut items = Vec::new();
    let mut index = 0;
    let mut selected = 0;
    for section in screen.menu.iter().flat_map(|m| m.sections.iter()) {
        items.push(ListItem::new(Line::styled(
            section.title.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for row in &section.items {
            if index == screen.cursor {
                selected = items.len();
            }
            index += 1;
            let style = if row.active {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<28}", row.name), style),
                Span::raw(format!("{:>8}", row.price)),
                Span::raw(if row.active { "" } else { "  (inactivo)" }),
            ])));
        }
    }
    render_list(f, area, " Menú ", items, selected);
}

fn draw_history(f: &mut Frame, screen: &Screen, area: Rect) {
    let items: Vec<ListItem> = screen
        .history
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<8} {}  ", row.mesa_label, row.created_at)),
                Span::styled(format!("{:<22}", row.status_label), order_style(row.status)),
                Span::raw(row.total.clone()),
            ]))
        })
        .collect();
    render_list(f, area, " Historial ", items, screen.cursor);
}

fn draw_footer(f: &mut Frame, screen: &Screen, area: Rect) {
    let footer = match screen.visible_toast() {
        Some(toast) => {
            let color = match toast.level {
                NotificationLevel::Info => Color::Cyan,
                NotificationLevel::Success => Color::Green,
                NotificationLevel::Warning => Color::Yellow,
                NotificationLevel::Error => Color::Red,
            };
            Paragraph::new(format!(" {} ", toast.message))
                .style(Style::default().fg(Color::Black).bg(color))
        }
        None => Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer, area);
}

fn render_list(f: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let empty = items.is_empty();
    let list = List::new(items)
        .block(Block::bordered().title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !empty {
        state.select(Some(selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn table_style(status: MesaStatus) -> Style {
    match status {
        MesaStatus::Available => Style::default().fg(Color::Green),
        MesaStatus::Occupied => Style::default().fg(Color::Red),
        MesaStatus::Inactive => Style::default().fg(Color::DarkGray),
    }
}

fn order_style(status: OrderStatus) -> Style {
    match status {
        OrderStatus::Pending => Style::default().fg(Color::Yellow),
        OrderStatus::Confirmed => Style::default().fg(Color::Blue),
        OrderStatus::Ready => Style::default().fg(Color::Green),
        OrderStatus::Cancelled => Style::default().fg(Color::Red),
    }
}

/// Fixed-size rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
