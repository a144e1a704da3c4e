//! 输入框消息处理

use tasklist_core::CoreError;

use crate::i18n::t;
use crate::message::InputMessage;
use crate::model::{App, FocusPanel};

/// 处理输入框消息
pub async fn update(app: &mut App, msg: InputMessage) {
    match msg {
        InputMessage::Insert(c) => {
            // 开始输入新任务时清除上一条状态消息
            if app.input.is_idle() {
                app.clear_status();
            }
            app.focus = FocusPanel::Input;
            app.input.insert(c);
        }
        InputMessage::Backspace => app.input.backspace(),
        InputMessage::Delete => app.input.delete(),
        InputMessage::MoveLeft => app.input.move_left(),
        InputMessage::MoveRight => app.input.move_right(),
        InputMessage::MoveHome => app.input.move_home(),
        InputMessage::MoveEnd => app.input.move_end(),
        InputMessage::Clear => app.input.clear(),
        InputMessage::Submit => submit(app).await,
    }
}

/// 提交输入框中的文本
///
/// 空白文本直接清空输入框；添加失败（如重复）时保留文本以便修改。
async fn submit(app: &mut App) {
    let text = app.input.text().to_string();

    match app.state.tasks.add_task(&text).await {
        Ok(Some(change)) => {
            app.input.clear();
            super::sync_viewport(app);

            // 选中并滚动到新任务
            let len = app.state.tasks.len();
            app.list.select_last(len);
            if let Some(selected) = app.selected() {
                app.state.viewport.ensure_visible(selected);
            }

            let status = &t().status;
            match change.persist_error {
                Some(err) => app.set_status(format!("{}: {err}", status.not_saved)),
                None => app.set_status(status.added),
            }
        }
        Ok(None) => {
            app.input.clear();
        }
        Err(CoreError::DuplicateTask(text)) => {
            log::warn!("Rejected duplicate task '{text}'");
            app.set_status(format!("{}: {text}", t().status.duplicate));
        }
        Err(err) => super::report_error(app, &err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tasklist_app::AppStateBuilder;
    use tasklist_core::test_utils::{FailingTaskStore, FAILED_WRITE};
    use tasklist_core::traits::{InMemoryTaskStore, TaskStore};
    use tasklist_core::PLACEHOLDER_TEXT;

    use super::*;
    use crate::model::InputState;
    use crate::update::test_support::{started_app, texts};

    async fn type_and_submit(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, InputMessage::Insert(c)).await;
        }
        update(app, InputMessage::Submit).await;
    }

    #[tokio::test]
    async fn submit_appends_and_clears() {
        let store = Arc::new(InMemoryTaskStore::new());
        let mut app = started_app(store.clone()).await;

        type_and_submit(&mut app, "Buy milk").await;

        assert_eq!(texts(&app), vec![PLACEHOLDER_TEXT, "Buy milk"]);
        assert_eq!(
            store.load_all().await.unwrap(),
            vec![PLACEHOLDER_TEXT, "Buy milk"]
        );
        assert_eq!(app.input, InputState::Idle);
        assert_eq!(app.selected(), Some(1));
        assert_eq!(app.state.viewport.content_height(), 2);
    }

    #[tokio::test]
    async fn submit_trims_text() {
        let mut app = started_app(Arc::new(InMemoryTaskStore::new())).await;

        type_and_submit(&mut app, "  Water plants  ").await;

        assert_eq!(texts(&app)[1], "Water plants");
    }

    #[tokio::test]
    async fn blank_submit_is_ignored() {
        let store = Arc::new(InMemoryTaskStore::new());
        let mut app = started_app(store.clone()).await;

        type_and_submit(&mut app, "   ").await;

        assert_eq!(app.state.tasks.len(), 1);
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(app.input.is_idle());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn persist_failure_keeps_task_and_warns() {
        let store = Arc::new(FailingTaskStore::new());
        let mut app = started_app(store.clone()).await;
        store.set_fail_writes(true).await;

        type_and_submit(&mut app, "Pay rent").await;

        assert_eq!(texts(&app), vec![PLACEHOLDER_TEXT, "Pay rent"]);
        assert_eq!(store.load_all().await.unwrap(), vec![PLACEHOLDER_TEXT]);
        let status = app.status_message.clone().unwrap();
        assert!(status.contains(FAILED_WRITE));
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn duplicate_keeps_input_text() {
        let mut state = AppStateBuilder::new()
            .store(Arc::new(InMemoryTaskStore::new()))
            .reject_duplicates(true)
            .build()
            .unwrap();
        state.run_startup().await.unwrap();
        let mut app = App::new(state);

        type_and_submit(&mut app, "Buy milk").await;
        type_and_submit(&mut app, "Buy milk").await;

        assert_eq!(app.state.tasks.len(), 2);
        assert_eq!(app.input.text(), "Buy milk");
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn typing_moves_focus_to_input() {
        let mut app = started_app(Arc::new(InMemoryTaskStore::new())).await;
        app.focus = FocusPanel::List;

        update(&mut app, InputMessage::Insert('a')).await;

        assert_eq!(app.focus, FocusPanel::Input);
        assert_eq!(app.input.text(), "a");
    }
}
