//! 视图层
//!
//! 渲染函数只读取存储快照，生成与界面无关的视图模型
//! ([`model`])，由 [`crate::console::Presenter`] 负责具体展示。
//!
//! | 视图 | 标题 | 依赖的存储键 |
//! |------|------|--------------|
//! | mesas | Gestión de Mesas | mesas |
//! | pedidos | Pedidos Activos | orders |
//! | menu | Gestión de Menú | menu |
//! | historial | Historial de Pedidos | orders |

pub mod history;
pub mod menu;
pub mod model;
pub mod orders;
pub mod tables;

pub use model::*;

use shared::StorageKey;
use std::fmt;
use std::str::FromStr;

use crate::core::ConsoleError;

/// Title shown for names that do not map to a view
const FALLBACK_TITLE: &str = "Panel";

/// 控制台视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewName {
    #[default]
    Mesas,
    Pedidos,
    Menu,
    Historial,
}

impl ViewName {
    pub const ALL: [ViewName; 4] = [
        ViewName::Mesas,
        ViewName::Pedidos,
        ViewName::Menu,
        ViewName::Historial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mesas => "mesas",
            Self::Pedidos => "pedidos",
            Self::Menu => "menu",
            Self::Historial => "historial",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Mesas => "Gestión de Mesas",
            Self::Pedidos => "Pedidos Activos",
            Self::Menu => "Gestión de Menú",
            Self::Historial => "Historial de Pedidos",
        }
    }

    /// The storage key whose changes make this view stale
    pub fn source_key(&self) -> StorageKey {
        match self {
            Self::Mesas => StorageKey::Mesas,
            Self::Pedidos | Self::Historial => StorageKey::Orders,
            Self::Menu => StorageKey::Menu,
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewName {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ConsoleError::UnknownView(s.to_string()))
    }
}

/// Title for a raw view name, falling back to [`FALLBACK_TITLE`]
pub fn title_for(name: &str) -> &'static str {
    name.parse::<ViewName>()
        .map(|v| v.title())
        .unwrap_or(FALLBACK_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_views() {
        for view in ViewName::ALL {
            assert_eq!(view.as_str().parse::<ViewName>().unwrap(), view);
        }
        assert_eq!(ViewName::default(), ViewName::Mesas);
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        let err = "reportes".parse::<ViewName>().unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownView(name) if name == "reportes"));
        assert_eq!(title_for("reportes"), "Panel");
        assert_eq!(title_for("pedidos"), "Pedidos Activos");
    }

    #[test]
    fn test_history_follows_orders() {
        assert_eq!(ViewName::Historial.source_key(), StorageKey::Orders);
        assert_eq!(ViewName::Pedidos.source_key(), StorageKey::Orders);
        assert_eq!(ViewName::Mesas.source_key(), StorageKey::Mesas);
    }
}
