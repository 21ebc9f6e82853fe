//! Menu editor renderer

use shared::MenuSection;

use super::model::{MenuItemAction, MenuItemRow, MenuSectionView, MenuView};
use crate::store::DataStore;
use crate::utils::Formatter;

/// Both sections, rendered by the same per-section renderer
pub fn render_menu<S: DataStore + ?Sized>(store: &S, fmt: &Formatter) -> MenuView {
    MenuView {
        sections: MenuSection::ALL
            .into_iter()
            .map(|section| render_section(store, section, fmt))
            .collect(),
    }
}

fn render_section<S: DataStore + ?Sized>(store: &S, section: MenuSection, fmt: &Formatter) -> MenuSectionView {
    MenuSectionView {
        section,
        title: section.title().to_string(),
        items: store
            .menu()
            .section(section)
            .iter()
            .map(|item| MenuItemRow {
                id: item.id.clone(),
                name: item.name.clone(),
                price: fmt.currency(item.price),
                amount: item.price,
                active: item.active,
                actions: [MenuItemAction::Toggle, MenuItemAction::Edit, MenuItemAction::Delete],
            })
            .collect(),
    }
}
