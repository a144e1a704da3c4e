//! 任务列表组件
//!
//! 每一帧：`recolor_all` 按位置分配配色 → `Viewport::layout` 计算行位置
//! → 只绘制 `visible_range` 内的行。

use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tasklist_core::render::Bounds;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, parse_color, Styles};

/// 渲染任务列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.tasks.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_list()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.state.tasks.all();
    if entries.is_empty() {
        let empty = Paragraph::new(texts.tasks.empty).style(Style::default().fg(c.muted));
        frame.render_widget(empty, inner);
        return;
    }

    let viewport = &app.state.viewport;
    let rows = app.state.styles.recolor_all(entries);
    let layouts = viewport.layout(rows.len());
    let selected = app.selected();

    for index in viewport.visible_range() {
        let (Some(row), Some(slot)) = (rows.get(index), layouts.get(index)) else {
            continue;
        };
        let Some(rect) = row_rect(slot.bounds, viewport.offset(), inner) else {
            continue;
        };

        let mut style = Style::default()
            .bg(parse_color(&row.scheme.background))
            .fg(parse_color(&row.scheme.foreground));
        let is_selected = selected == Some(index);
        if is_selected {
            style = style.add_modifier(Modifier::BOLD);
            if app.focus.is_list() {
                style = style.add_modifier(Modifier::REVERSED);
            }
        }

        let marker = if is_selected { "▶ " } else { "  " };
        let line = Paragraph::new(format!("{marker}{}", row.entry.text)).style(style);
        frame.render_widget(line, rect);
    }

    if viewport.max_offset() > 0 {
        render_scrollbar(app, frame, area);
    }
}

/// 滚动条画在右边框上
fn render_scrollbar(app: &App, frame: &mut Frame, area: Rect) {
    let viewport = &app.state.viewport;
    let mut state = ScrollbarState::new(viewport.content_height() as usize)
        .position(viewport.offset() as usize)
        .viewport_content_length(viewport.height() as usize);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(colors().border_focused));

    let scrollbar_area = area.inner(Margin {
        vertical: 1,
        horizontal: 0,
    });
    if scrollbar_area.width > 0 && scrollbar_area.height > 0 {
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut state);
    }
}

/// 内容空间中的行矩形 → 屏幕矩形，裁剪到视口内；完全不可见时返回 `None`
fn row_rect(bounds: Bounds, offset: u32, area: Rect) -> Option<Rect> {
    let top = i64::from(bounds.y) - i64::from(offset);
    let bottom = top + i64::from(bounds.height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i64::from(area.height));
    if visible_bottom <= visible_top {
        return None;
    }

    let y = area.y.checked_add(u16::try_from(visible_top).ok()?)?;
    let height = u16::try_from(visible_bottom - visible_top).ok()?;
    let width = u16::try_from(bounds.width).unwrap_or(u16::MAX).min(area.width);
    Some(Rect::new(area.x, y, width, height))
}
