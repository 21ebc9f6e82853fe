//! Active order renderer

use shared::{Order, OrderStatus};

use super::model::{OrderAction, OrderCard, OrderLine, OrderList};
use crate::store::DataStore;
use crate::utils::Formatter;

/// Actions offered on an order card
///
/// `ready` is terminal here: no button is offered even though
/// [`crate::console::AdminConsole::mark_order_ready`] would accept it.
pub fn actions_for(status: OrderStatus) -> Vec<OrderAction> {
    match status {
        OrderStatus::Pending => vec![OrderAction::Confirm, OrderAction::Reject],
        OrderStatus::Confirmed => vec![OrderAction::MarkReady],
        OrderStatus::Ready | OrderStatus::Cancelled => Vec::new(),
    }
}

/// Active orders in store order, or [`OrderList::Empty`]
pub fn render_orders<S: DataStore + ?Sized>(store: &S, fmt: &Formatter) -> OrderList {
    let active = store.active_orders();
    if active.is_empty() {
        return OrderList::Empty;
    }
    OrderList::Cards(active.into_iter().map(|order| order_card(order, fmt)).collect())
}

pub fn order_card(order: &Order, fmt: &Formatter) -> OrderCard {
    OrderCard {
        id: order.id.clone(),
        mesa_label: format!("Mesa {}", order.mesa_id),
        created_at: fmt.time(order.created_at),
        status: order.status,
        status_label: order.status.label().to_string(),
        lines: order
            .items
            .iter()
            .map(|item| OrderLine {
                text: format!("{}x {}", item.quantity, item.name),
                note: item.notes.clone().filter(|n| !n.trim().is_empty()),
            })
            .collect(),
        total: fmt.currency(order.total),
        actions: actions_for(order.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_order, store_with_orders};

    #[test]
    fn test_pending_card_matches_example() {
        let store = store_with_orders(vec![sample_order("o1", 5, OrderStatus::Pending)]);
        let list = render_orders(&store, &Formatter::default());

        let card = &list.cards()[0];
        assert_eq!(card.mesa_label, "Mesa 5");
        assert_eq!(card.lines[0].text, "2x Ceviche");
        assert_eq!(card.total, "$12.50");
        assert_eq!(card.status_label, "Esperando Confirmación");
        assert_eq!(card.actions, vec![OrderAction::Confirm, OrderAction::Reject]);
    }

    #[test]
    fn test_action_sets_per_status() {
        assert_eq!(actions_for(OrderStatus::Pending).len(), 2);
        assert_eq!(actions_for(OrderStatus::Confirmed), vec![OrderAction::MarkReady]);
        // ready is terminal, the mark-ready button is suppressed
        assert!(actions_for(OrderStatus::Ready).is_empty());
    }

    #[test]
    fn test_only_active_orders_in_store_order() {
        let store = store_with_orders(vec![
            sample_order("o1", 1, OrderStatus::Confirmed),
            sample_order("o2", 2, OrderStatus::Cancelled),
            sample_order("o3", 3, OrderStatus::Pending),
            sample_order("o4", 4, OrderStatus::Ready),
        ]);
        let list = render_orders(&store, &Formatter::default());
        let ids: Vec<&str> = list.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3", "o4"]);
    }

    #[test]
    fn test_empty_state() {
        let store = store_with_orders(vec![sample_order("o1", 1, OrderStatus::Cancelled)]);
        let list = render_orders(&store, &Formatter::default());
        assert!(list.is_empty());
        assert!(list.cards().is_empty());
    }

    #[test]
    fn test_notes_are_optional() {
        let mut order = sample_order("o1", 1, OrderStatus::Pending);
        order.items[0].notes = Some("sin cebolla".into());
        order.items.push(shared::OrderItem::new(1, "Agua", rust_decimal::Decimal::ONE).with_notes("  "));
        let card = order_card(&order, &Formatter::default());
        assert_eq!(card.lines[0].note.as_deref(), Some("sin cebolla"));
        assert_eq!(card.lines[1].note, None);
    }
}
