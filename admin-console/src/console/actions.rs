//! 用户操作
//!
//! 每个操作：(确认) → 调用存储 → 提示 → 重新渲染。
//! 持久化由存储负责，这里不直接读写底层存储。

use shared::models::MenuItemUpdate;
use shared::{MesaId, MesaStatus, Notification, OrderStatus, StorageKey};

use super::{AdminConsole, Presenter};
use crate::core::ConsoleResult;
use crate::store::DataStore;
use crate::view;

impl<S: DataStore, P: Presenter> AdminConsole<S, P> {
    // ========== Orders ==========

    /// 确认订单 (pending → confirmed)，需要用户确认
    ///
    /// Re-renders both the order list and the table grid. Orders that are
    /// no longer pending are left alone without asking.
    pub fn approve_order(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.is_pending(id) {
            return Ok(());
        }
        if !self.presenter.confirm("¿Confirmar este pedido para cocina?") {
            tracing::debug!(order_id = %id, "Approve declined");
            return Ok(());
        }
        if !self.store.update_order_status(id, OrderStatus::Confirmed)? {
            return Ok(());
        }
        tracing::info!(order_id = %id, "Order approved");
        self.presenter.notify(Notification::success("Pedido enviado a cocina"));
        self.render_orders();
        self.render_tables();
        Ok(())
    }

    /// 拒绝订单 (pending → cancelled)，需要用户确认
    pub fn reject_order(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.is_pending(id) {
            return Ok(());
        }
        if !self.presenter.confirm("¿Seguro que deseas rechazar este pedido?") {
            tracing::debug!(order_id = %id, "Reject declined");
            return Ok(());
        }
        if !self.store.update_order_status(id, OrderStatus::Cancelled)? {
            return Ok(());
        }
        tracing::info!(order_id = %id, "Order rejected");
        self.presenter.notify(Notification::warning("Pedido rechazado"));
        self.render_orders();
        Ok(())
    }

    /// 标记可上菜，不需要确认
    ///
    /// Sets `ready` whatever the current status is; the renderer simply never
    /// offers the action for orders that are already ready.
    pub fn mark_order_ready(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.store.update_order_status(id, OrderStatus::Ready)? {
            return Ok(());
        }
        tracing::info!(order_id = %id, "Order ready");
        self.presenter.notify(Notification::success("¡Pedido marcado como listo!"));
        self.render_orders();
        Ok(())
    }

    fn is_pending(&self, id: &str) -> bool {
        match self.store.get_order(id) {
            Some(order) if order.status == OrderStatus::Pending => true,
            Some(order) => {
                tracing::debug!(order_id = %id, status = %order.status, "Order no longer pending, ignored");
                false
            }
            None => false,
        }
    }

    // ========== Tables ==========

    /// 打开桌台详情，桌台不存在时不做任何事
    pub fn open_table_modal(&mut self, id: MesaId) {
        self.state.selected_mesa = Some(id);
        let Some(detail) = view::tables::table_detail(&self.store, id) else {
            return;
        };
        self.state.table_modal_open = true;
        self.presenter.show_table_detail(detail);
    }

    pub fn close_table_modal(&mut self) {
        self.state.table_modal_open = false;
        self.presenter.hide_table_detail();
    }

    /// 启用/停用当前选中的桌台
    ///
    /// inactive → available, anything else → inactive. The whole table
    /// collection is written back.
    pub fn toggle_table(&mut self) -> ConsoleResult<()> {
        let Some(id) = self.state.selected_mesa else {
            return Ok(());
        };
        let Some(status) = self.store.get_table(id).map(|m| m.status) else {
            return Ok(());
        };
        if status == MesaStatus::Inactive {
            self.store.activate_table(id);
        } else {
            self.store.deactivate_table(id);
        }
        self.store.persist(StorageKey::Mesas)?;
        tracing::info!(mesa_id = id, from = %status, "Table toggled");

        self.close_table_modal();
        self.render_tables();
        self.presenter
            .notify(Notification::success(format!("Mesa {id} actualizada")));
        Ok(())
    }

    // ========== Menu ==========

    pub fn toggle_menu_item(&mut self, id: &str) -> ConsoleResult<()> {
        if self.store.toggle_menu_item(id)? {
            tracing::info!(item_id = %id, "Menu item toggled");
            self.render_menu();
        }
        Ok(())
    }

    pub fn edit_menu_item(&mut self, id: &str, update: MenuItemUpdate) -> ConsoleResult<()> {
        if self.store.update_menu_item(id, update)? {
            tracing::info!(item_id = %id, "Menu item updated");
            self.presenter.notify(Notification::success("Plato actualizado"));
            self.render_menu();
        }
        Ok(())
    }

    /// 删除菜品，需要用户确认
    pub fn delete_menu_item(&mut self, id: &str) -> ConsoleResult<()> {
        if !self.presenter.confirm("¿Eliminar este plato del menú?") {
            return Ok(());
        }
        if self.store.delete_menu_item(id)? {
            tracing::info!(item_id = %id, "Menu item deleted");
            self.presenter.notify(Notification::warning("Plato eliminado"));
            self.render_menu();
        }
        Ok(())
    }

    // ========== Session ==========

    /// 退出登录，返回是否真的退出
    pub fn logout(&mut self) -> ConsoleResult<bool> {
        if !self.presenter.confirm("¿Cerrar sesión?") {
            return Ok(false);
        }
        self.store.clear_session()?;
        tracing::info!("Admin logged out");
        Ok(true)
    }
}
