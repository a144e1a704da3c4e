//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 输入框高度（含边框）
const INPUT_HEIGHT: u16 = 3;

/// 主界面各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub title: Rect,
    pub list: Rect,
    pub input: Rect,
    pub status: Rect,
}

impl AppAreas {
    /// 四层布局：标题栏 + 任务列表 + 输入框 + 状态栏
    pub fn compute(size: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // 标题栏
                Constraint::Min(1),               // 任务列表
                Constraint::Length(INPUT_HEIGHT), // 输入框
                Constraint::Length(1),            // 状态栏
            ])
            .split(size);

        Self {
            title: rows[0],
            list: rows[1],
            input: rows[2],
            status: rows[3],
        }
    }

    /// 任务列表边框内的区域，也就是视口
    pub fn list_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.list)
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = AppAreas::compute(frame.area());

    render_title_bar(app, frame, areas.title);
    components::task_list::render(app, frame, areas.list);
    components::input_box::render(app, frame, areas.input);
    components::statusbar::render(app, frame, areas.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} ({})",
        t().common.app_name,
        app.state.tasks.len()
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_vertically() {
        let areas = AppAreas::compute(Rect::new(0, 0, 40, 20));

        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.input.height, INPUT_HEIGHT);
        assert_eq!(areas.status.y, 19);
        assert_eq!(areas.list.height, 20 - 1 - INPUT_HEIGHT - 1);
    }

    #[test]
    fn list_inner_strips_border() {
        let areas = AppAreas::compute(Rect::new(0, 0, 40, 20));
        let inner = areas.list_inner();

        assert_eq!(inner.x, 1);
        assert_eq!(inner.y, areas.list.y + 1);
        assert_eq!(inner.width, 38);
    }
}
