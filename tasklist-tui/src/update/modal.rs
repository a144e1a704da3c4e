//! 弹窗消息处理

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub async fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg).await,
        Some(Modal::Help | Modal::Error { .. }) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 处理确认删除弹窗
async fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref entry,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            let confirmed = *focus == 1;
            let entry = entry.clone();
            app.modal.close();

            if confirmed {
                delete_task(app, &entry).await;
            }
        }
    }
}

/// 删除任务；数据库删除失败时任务仍从列表中移除并给出警告
async fn delete_task(app: &mut App, entry: &tasklist_core::TaskEntry) {
    match app.state.tasks.remove_task(entry).await {
        Ok(change) => {
            super::sync_viewport(app);
            let status = &t().status;
            match change.persist_error {
                Some(err) => app.set_status(format!("{}: {err}", status.not_removed)),
                None => app.set_status(status.deleted),
            }
        }
        Err(err) => super::report_error(app, &err),
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleFocus => {}
    }
}
