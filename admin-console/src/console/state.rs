use shared::MesaId;

use crate::view::ViewName;

/// 控制台视图状态，由 [`super::AdminConsole`] 独占
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub current_view: ViewName,
    /// Kept after the popup closes; overwritten by the next open
    pub selected_mesa: Option<MesaId>,
    pub table_modal_open: bool,
}
