//! 任务列表消息处理
//!
//! 选中和滚动只改变视口与选中项，不触碰任务列表本身。

use crate::message::ListMessage;
use crate::model::{App, FocusPanel};

/// 处理任务列表消息
pub fn update(app: &mut App, msg: ListMessage) {
    let len = app.state.tasks.len();

    match msg {
        ListMessage::SelectPrevious => app.list.select_previous(len),
        ListMessage::SelectNext => app.list.select_next(len),
        ListMessage::SelectFirst => app.list.select_first(),
        ListMessage::SelectLast => app.list.select_last(len),
        ListMessage::PageUp => app.list.page_up(page_size(app), len),
        ListMessage::PageDown => app.list.page_down(page_size(app), len),

        ListMessage::Scroll(delta) => {
            app.state.viewport.scroll(delta);
            return;
        }

        ListMessage::Click { y } => {
            let Some(index) = app.state.viewport.row_at(u32::from(y)) else {
                return;
            };
            app.focus = FocusPanel::List;
            app.list.select(index, len);
            request_delete(app);
            return;
        }

        ListMessage::RequestDelete => {
            request_delete(app);
            return;
        }
    }

    if let Some(selected) = app.selected() {
        app.state.viewport.ensure_visible(selected);
    }
}

/// 打开选中任务的确认删除弹窗
fn request_delete(app: &mut App) {
    let Some(entry) = app.selected().and_then(|i| app.state.tasks.get(i)).cloned() else {
        return;
    };
    app.modal.show_confirm_delete(entry);
}

/// 一页可以完整显示的行数
fn page_size(app: &App) -> usize {
    let viewport = &app.state.viewport;
    (viewport.height() / viewport.row_height()) as usize
}
