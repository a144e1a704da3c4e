//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tasklist_core::render::WheelDelta;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage, ListMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗打开时所有按键都交给弹窗
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_F1.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // Esc：输入框有内容时清空，否则退出
    if DefaultKeymap::BACK.matches(&key) {
        return if app.input.is_idle() {
            AppMessage::Quit
        } else {
            AppMessage::Input(InputMessage::Clear)
        };
    }

    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::RequestDelete);
    }

    // ↑↓ 在两个面板中都移动列表选中项
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::List(ListMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::List(ListMessage::SelectNext);
    }

    if app.focus.is_input() {
        handle_input_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理输入框的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Input(InputMessage::Submit);
    }

    match key.code {
        KeyCode::Char(c) if is_text_modifier(key.modifiers) => {
            AppMessage::Input(InputMessage::Insert(c))
        }
        KeyCode::Backspace => AppMessage::Input(InputMessage::Backspace),
        KeyCode::Delete => AppMessage::Input(InputMessage::Delete),
        KeyCode::Left => AppMessage::Input(InputMessage::MoveLeft),
        KeyCode::Right => AppMessage::Input(InputMessage::MoveRight),
        KeyCode::Home => AppMessage::Input(InputMessage::MoveHome),
        KeyCode::End => AppMessage::Input(InputMessage::MoveEnd),
        _ => AppMessage::Noop,
    }
}

/// 处理任务列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char('k') if key.modifiers.is_empty() => {
            AppMessage::List(ListMessage::SelectPrevious)
        }
        KeyCode::Char('j') if key.modifiers.is_empty() => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        KeyCode::PageUp => AppMessage::List(ListMessage::PageUp),
        KeyCode::PageDown => AppMessage::List(ListMessage::PageDown),
        KeyCode::Delete | KeyCode::Enter => AppMessage::List(ListMessage::RequestDelete),

        // 在列表中直接打字：交给输入框
        KeyCode::Char(c) if is_text_modifier(key.modifiers) => {
            AppMessage::Input(InputMessage::Insert(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 帮助和错误弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理鼠标事件
///
/// 弹窗打开时忽略鼠标，保证确认之前列表不会被修改。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    let position = Position::new(mouse.column, mouse.row);
    let in_list = app.list_area.contains(position);

    match mouse.kind {
        MouseEventKind::ScrollUp => AppMessage::List(ListMessage::Scroll(WheelDelta::Up)),
        MouseEventKind::ScrollDown => AppMessage::List(ListMessage::Scroll(WheelDelta::Down)),
        MouseEventKind::Down(MouseButton::Left) if in_list => AppMessage::List(ListMessage::Click {
            y: mouse.row - app.list_area.y,
        }),
        _ => AppMessage::Noop,
    }
}

/// 可以输入文本的修饰键组合（无修饰或仅 Shift）
fn is_text_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use tasklist_app::AppStateBuilder;
    use tasklist_core::{InMemoryTaskStore, TaskEntry, TaskId};

    use super::*;
    use crate::model::FocusPanel;

    fn app() -> App {
        let state = AppStateBuilder::new()
            .store(Arc::new(InMemoryTaskStore::new()))
            .build()
            .unwrap();
        let mut app = App::new(state);
        app.list_area = Rect::new(1, 2, 20, 10);
        app
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn typing_goes_to_input() {
        let app = app();
        assert_eq!(
            handle_event(key(KeyCode::Char('M'), KeyModifiers::SHIFT), &app),
            AppMessage::Input(InputMessage::Insert('M'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Submit)
        );
    }

    #[test]
    fn esc_quits_only_when_input_is_empty() {
        let mut app = app();
        assert_eq!(
            handle_event(key(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Quit
        );

        app.input.insert('x');
        assert_eq!(
            handle_event(key(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Clear)
        );
    }

    #[test]
    fn delete_key_depends_on_focus() {
        let mut app = app();
        assert_eq!(
            handle_event(key(KeyCode::Delete, KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Delete)
        );

        app.focus = FocusPanel::List;
        assert_eq!(
            handle_event(key(KeyCode::Delete, KeyModifiers::NONE), &app),
            AppMessage::List(ListMessage::RequestDelete)
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::List(ListMessage::RequestDelete)
        );
    }

    #[test]
    fn open_modal_captures_keys() {
        let mut app = app();
        app.modal
            .show_confirm_delete(TaskEntry::new(TaskId::new(0), "Buy milk"));

        assert_eq!(
            handle_event(key(KeyCode::Char('x'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(key(KeyCode::Right, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::ToggleFocus)
        );
        assert_eq!(
            handle_event(key(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn wheel_maps_to_scroll() {
        let app = app();
        assert_eq!(
            handle_event(mouse(MouseEventKind::ScrollDown, 0, 0), &app),
            AppMessage::List(ListMessage::Scroll(WheelDelta::Down))
        );
        assert_eq!(
            handle_event(mouse(MouseEventKind::ScrollUp, 0, 0), &app),
            AppMessage::List(ListMessage::Scroll(WheelDelta::Up))
        );
    }

    #[test]
    fn click_is_relative_to_list_area() {
        let app = app();
        assert_eq!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), &app),
            AppMessage::List(ListMessage::Click { y: 2 })
        );
        assert_eq!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 30), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn mouse_is_ignored_while_modal_open() {
        let mut app = app();
        app.modal.show_help();
        assert_eq!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn resize_is_forwarded() {
        let app = app();
        assert_eq!(
            handle_event(Event::Resize(80, 24), &app),
            AppMessage::Resize {
                width: 80,
                height: 24
            }
        );
    }
}
