//! 实时同步、订单轮询与时钟

use chrono::Local;
use shared::{Notification, StorageKey, StoreEvent};

use super::{AdminConsole, Presenter};
use crate::core::ConsoleResult;
use crate::store::DataStore;
use crate::view::ViewName;

impl<S: DataStore, P: Presenter> AdminConsole<S, P> {
    /// 处理其他上下文的写入通知
    ///
    /// Reloads exactly the changed collection and re-renders only when the
    /// visible view is built from it. Own writes are ignored.
    pub fn on_store_changed(&mut self, event: &StoreEvent) -> ConsoleResult<()> {
        if !event.is_foreign(self.store.context_id()) {
            return Ok(());
        }

        let notice = match event.key {
            StorageKey::Mesas => "Estado de mesas actualizado",
            StorageKey::Orders => "¡Hay novedades en los pedidos!",
            StorageKey::Menu => "Menú actualizado",
            StorageKey::AdminSession => return Ok(()),
        };

        tracing::info!(key = %event.key, version = event.version, "External store change");
        self.store.reload(event.key)?;

        let view = self.state.current_view;
        if view.source_key() == event.key {
            self.render_view(view);
        }
        self.presenter.notify(Notification::info(notice));
        Ok(())
    }

    /// 订单轮询：只有在订单视图时才重新渲染
    pub fn refresh_orders(&mut self) {
        if self.state.current_view == ViewName::Pedidos {
            self.render_orders();
        }
    }

    pub fn tick_clock(&mut self) {
        let text = self.fmt.date_time(Local::now());
        self.presenter.set_clock(text);
    }
}
