//! Dining Table Model (mesa)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{MesaId, Timestamp};

/// 桌台状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MesaStatus {
    /// 空闲
    Available,
    /// 有客人就座
    Occupied,
    /// 停用
    Inactive,
}

impl MesaStatus {
    /// 界面显示文本
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Occupied => "Ocupada",
            Self::Inactive => "Inactiva",
        }
    }
}

impl fmt::Display for MesaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Dining table entity (桌台)
///
/// `session_start` is only present while the table is occupied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesa {
    pub id: MesaId,
    pub status: MesaStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_start: Option<Timestamp>,
    /// Order references (order ids)
    #[serde(default)]
    pub orders: Vec<String>,
}

impl Mesa {
    /// New available table without orders
    pub fn new(id: MesaId) -> Self {
        Self {
            id,
            status: MesaStatus::Available,
            session_start: None,
            orders: Vec::new(),
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status == MesaStatus::Occupied
    }

    /// 启用桌台 (→ available)
    pub fn activate(&mut self) {
        self.status = MesaStatus::Available;
        self.session_start = None;
    }

    /// 停用桌台 (→ inactive)
    pub fn deactivate(&mut self) {
        self.status = MesaStatus::Inactive;
        self.session_start = None;
    }

    /// 客人入座，只对空闲桌台生效
    pub fn seat(&mut self, now: Timestamp) -> bool {
        if self.status != MesaStatus::Available {
            return false;
        }
        self.status = MesaStatus::Occupied;
        self.session_start = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesa_json_layout() {
        let mut mesa = Mesa::new(3);
        mesa.seat(1_700_000_000_000);
        let json = serde_json::to_value(&mesa).unwrap();
        assert_eq!(json["status"], "occupied");
        assert_eq!(json["sessionStart"], 1_700_000_000_000i64);

        mesa.deactivate();
        let json = serde_json::to_value(&mesa).unwrap();
        assert!(json.get("sessionStart").is_none());
    }

    #[test]
    fn test_seat_requires_available() {
        let mut mesa = Mesa::new(1);
        mesa.deactivate();
        assert!(!mesa.seat(1));
        assert_eq!(mesa.status, MesaStatus::Inactive);
    }
}
