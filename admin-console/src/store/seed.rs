//! 初始数据
//!
//! 首次启动时写入桌台和默认菜单，已存在的键不覆盖。

use rust_decimal::Decimal;
use shared::{Menu, MenuItem, MenuSection, Mesa, Order, StorageKey};

use super::storage::{SharedStorage, StoreResult};

/// Seed empty storage. Returns true if anything was written.
pub fn seed_defaults(storage: &SharedStorage, table_count: u32) -> StoreResult<bool> {
    let mut seeded = false;

    if !storage.contains(StorageKey::Mesas)? {
        let mesas: Vec<Mesa> = (1..=table_count).map(Mesa::new).collect();
        storage.save(StorageKey::Mesas, &mesas)?;
        tracing::info!(tables = table_count, "Seeded tables");
        seeded = true;
    }

    if !storage.contains(StorageKey::Orders)? {
        storage.save(StorageKey::Orders, &Vec::<Order>::new())?;
        seeded = true;
    }

    if !storage.contains(StorageKey::Menu)? {
        storage.save(StorageKey::Menu, &default_menu())?;
        tracing::info!("Seeded default menu");
        seeded = true;
    }

    Ok(seeded)
}

fn default_menu() -> Menu {
    let mut menu = Menu::default();
    let specialties = [
        ("esp-1", "Ceviche de Camarón", 850),
        ("esp-2", "Encebollado", 450),
        ("esp-3", "Viche de Pescado", 750),
        ("esp-4", "Tonga Manabita", 600),
    ];
    let daily = [
        ("dia-1", "Seco de Pollo", 350),
        ("dia-2", "Menestra con Carne", 350),
        ("dia-3", "Sopa de Bolas de Verde", 300),
    ];
    for (id, name, cents) in specialties {
        menu.push(MenuSection::Especialidades, MenuItem::new(id, name, Decimal::new(cents, 2)));
    }
    for (id, name, cents) in daily {
        menu.push(MenuSection::MenuDia, MenuItem::new(id, name, Decimal::new(cents, 2)));
    }
    menu
}
