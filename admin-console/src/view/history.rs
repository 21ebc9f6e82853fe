//! Order history renderer

use super::model::HistoryRow;
use crate::store::DataStore;
use crate::utils::Formatter;

pub fn render_history<S: DataStore + ?Sized>(store: &S, fmt: &Formatter) -> Vec<HistoryRow> {
    store
        .order_history()
        .into_iter()
        .map(|order| HistoryRow {
            id: order.id.clone(),
            mesa_label: format!("Mesa {}", order.mesa_id),
            created_at: fmt.time(order.created_at),
            status: order.status,
            status_label: order.status.label().to_string(),
            total: fmt.currency(order.total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_order, store_with_orders};
    use shared::OrderStatus;

    #[test]
    fn test_history_lists_terminal_orders() {
        let mut old = sample_order("o1", 1, OrderStatus::Cancelled);
        old.created_at -= 60_000;
        let store = store_with_orders(vec![
            old,
            sample_order("o2", 2, OrderStatus::Pending),
            sample_order("o3", 3, OrderStatus::Ready),
        ]);
        let rows = render_history(&store, &Formatter::default());
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["o3", "o1"]);
        assert_eq!(rows[1].status_label, "Cancelado");
    }
}
