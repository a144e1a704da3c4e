//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改任务列表的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod input;          // 输入框：编辑、提交（add_task）
//!         mod list;           // 列表：选中、滚动、点击、删除请求
//!         mod modal;          // 弹窗：确认删除（remove_task）、关闭
//!
//!     涉及存储的操作（add_task / remove_task）是异步的，
//!     主循环会等待它们完成后才读取下一个事件。
//!
//!     每次列表长度变化后都调用 `sync_viewport`，
//!     下一帧 View 层会从任务列表重新生成所有行并重新分配配色。
//!

mod input;
mod list;
mod modal;

use ratatui::layout::Rect;
use tasklist_core::CoreError;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::view::AppAreas;

/// 处理应用消息，更新状态
pub async fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Resize { width, height } => {
            resize(app, width, height);
        }

        AppMessage::Input(input_msg) => {
            input::update(app, input_msg).await;
        }

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg).await;
        }

        AppMessage::Noop => {}
    }
}

/// 终端大小改变：只更新视口，不触碰任务列表
fn resize(app: &mut App, width: u16, height: u16) {
    let inner = AppAreas::compute(Rect::new(0, 0, width, height)).list_inner();
    app.list_area = inner;
    app.state
        .viewport
        .resize(u32::from(inner.width), u32::from(inner.height));

    if let Some(selected) = app.selected() {
        app.state.viewport.ensure_visible(selected);
    }
}

/// 列表长度变化后同步视口和选中项
fn sync_viewport(app: &mut App) {
    let len = app.state.tasks.len();
    app.state.viewport.sync_content(len);
    app.list.clamp(len);
    if let Some(selected) = app.selected() {
        app.state.viewport.ensure_visible(selected);
    }
}

/// 显示错误：用户造成的错误放在状态栏，故障用弹窗
fn report_error(app: &mut App, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{err}");
        app.set_status(err.to_string());
    } else {
        log::error!("{err}");
        app.modal.show_error(t().common.error, &err.to_string());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tasklist_app::AppStateBuilder;
    use tasklist_core::traits::TaskStore;

    use crate::model::App;

    /// 启动完成、终端大小为 40x12 的应用
    pub async fn started_app(store: Arc<dyn TaskStore>) -> App {
        let mut state = AppStateBuilder::new().store(store).build().unwrap();
        state.run_startup().await.unwrap();
        let mut app = App::new(state);
        super::resize(&mut app, 40, 12);
        app
    }

    pub fn texts(app: &App) -> Vec<String> {
        app.state.tasks.all().iter().map(|e| e.text.clone()).collect()
    }
}
