//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 菜单分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuSection {
    /// 招牌菜
    #[serde(rename = "especialidades")]
    Especialidades,
    /// 今日套餐
    #[serde(rename = "menuDia")]
    MenuDia,
}

impl MenuSection {
    pub const ALL: [MenuSection; 2] = [MenuSection::Especialidades, MenuSection::MenuDia];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Especialidades => "Especialidades",
            Self::MenuDia => "Menú del Día",
        }
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Especialidades => write!(f, "especialidades"),
            Self::MenuDia => write!(f, "menuDia"),
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub active: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            active: true,
        }
    }
}

/// Update menu item payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub active: Option<bool>,
}

/// 菜单：两个分区，各自有序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(default)]
    pub especialidades: Vec<MenuItem>,
    #[serde(default)]
    pub menu_dia: Vec<MenuItem>,
}

impl Menu {
    pub fn section(&self, section: MenuSection) -> &[MenuItem] {
        match section {
            MenuSection::Especialidades => &self.especialidades,
            MenuSection::MenuDia => &self.menu_dia,
        }
    }

    fn section_mut(&mut self, section: MenuSection) -> &mut Vec<MenuItem> {
        match section {
            MenuSection::Especialidades => &mut self.especialidades,
            MenuSection::MenuDia => &mut self.menu_dia,
        }
    }

    /// Find an item in any section
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        MenuSection::ALL
            .iter()
            .find_map(|s| self.section(*s).iter().find(|item| item.id == id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut MenuItem> {
        if let Some(pos) = self.especialidades.iter().position(|item| item.id == id) {
            return self.especialidades.get_mut(pos);
        }
        self.menu_dia.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item from whichever section holds it
    pub fn remove(&mut self, id: &str) -> Option<MenuItem> {
        for section in MenuSection::ALL {
            let items = self.section_mut(section);
            if let Some(pos) = items.iter().position(|item| item.id == id) {
                return Some(items.remove(pos));
            }
        }
        None
    }

    pub fn push(&mut self, section: MenuSection, item: MenuItem) {
        self.section_mut(section).push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::default();
        menu.push(MenuSection::Especialidades, MenuItem::new("e1", "Encebollado", Decimal::new(450, 2)));
        menu.push(MenuSection::MenuDia, MenuItem::new("d1", "Seco de Pollo", Decimal::new(350, 2)));
        menu
    }

    #[test]
    fn test_menu_json_section_names() {
        let json = serde_json::to_value(sample_menu()).unwrap();
        assert_eq!(json["especialidades"][0]["name"], "Encebollado");
        assert_eq!(json["menuDia"][0]["price"], 3.5);
    }

    #[test]
    fn test_find_and_remove_across_sections() {
        let mut menu = sample_menu();
        assert!(menu.find("d1").is_some());
        menu.find_mut("d1").unwrap().active = false;
        assert!(!menu.find("d1").unwrap().active);

        let removed = menu.remove("d1").unwrap();
        assert_eq!(removed.name, "Seco de Pollo");
        assert!(menu.menu_dia.is_empty());
        assert!(menu.remove("missing").is_none());
    }
}
