//! Table grid renderer

use shared::{MesaId, Timestamp};

use super::model::{TableCard, TableDetail};
use crate::store::DataStore;
use crate::utils::Formatter;

/// One card per table, in store order, no filtering
pub fn render_tables<S: DataStore + ?Sized>(store: &S, fmt: &Formatter, now: Timestamp) -> Vec<TableCard> {
    store
        .list_tables()
        .iter()
        .map(|mesa| {
            let elapsed = match mesa.session_start {
                Some(start) if mesa.is_occupied() => fmt.elapsed(start, now),
                _ => "-".to_string(),
            };
            TableCard {
                id: mesa.id,
                status: mesa.status,
                status_label: mesa.status.label().to_string(),
                elapsed,
            }
        })
        .collect()
}

/// Popup summary, `None` if the table does not exist
pub fn table_detail<S: DataStore + ?Sized>(store: &S, id: MesaId) -> Option<TableDetail> {
    store.get_table(id).map(|mesa| TableDetail {
        number: mesa.id,
        status: mesa.status,
        status_label: mesa.status.label().to_string(),
        order_count: mesa.orders.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{connected_pair, item};
    use shared::MesaStatus;
    use shared::util::now_millis;

    #[test]
    fn test_elapsed_only_for_occupied_tables() {
        let (mut admin, mut customer) = connected_pair(3);
        customer.place_order(2, vec![item(1, "Encebollado", 450)]).unwrap();
        admin.reload(shared::StorageKey::Mesas).unwrap();

        let cards = render_tables(&admin, &Formatter::default(), now_millis() + 10 * 60_000);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].elapsed, "-");
        assert_eq!(cards[0].status_label, "Disponible");
        assert_eq!(cards[1].status, MesaStatus::Occupied);
        assert_eq!(cards[1].status_label, "Ocupada");
        assert_eq!(cards[1].elapsed, "10 min");
    }

    #[test]
    fn test_detail_counts_orders() {
        let (_, mut customer) = connected_pair(2);
        customer.place_order(1, vec![item(1, "Ceviche", 850)]).unwrap();
        customer.place_order(1, vec![item(2, "Limonada", 150)]).unwrap();

        let detail = table_detail(&customer, 1).unwrap();
        assert_eq!(detail.number, 1);
        assert_eq!(detail.order_count, 2);
        assert!(table_detail(&customer, 9).is_none());
    }
}
