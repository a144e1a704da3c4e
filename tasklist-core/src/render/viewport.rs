//! 可滚动视口
//!
//! 坐标使用内容空间的抽象单位（终端前端中即字符格）。
//! 行只在水平方向拉伸：每行宽度等于视口宽度，高度固定为 `row_height`。

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 矩形区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// 两个矩形的外接矩形
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// 一行在内容空间中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub position: usize,
    pub bounds: Bounds,
}

/// 滚轮增量
///
/// 不同平台报告方式不同，内部统一归一化为每格 `+1`（向下）/ `-1`（向上）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDelta {
    /// 原始增量（Windows/macOS 约定：正值向上，Windows 每格 120）
    Raw(i32),
    /// 向上一格（X11 按钮 4）
    Up,
    /// 向下一格（X11 按钮 5）
    Down,
}

impl WheelDelta {
    /// 归一化为滚动单位，只看方向不看幅度
    pub const fn normalize(self) -> i32 {
        match self {
            Self::Raw(delta) => -delta.signum(),
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// 视口配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// 每行高度（单位）
    pub row_height: u32,
    /// 每个滚动单位对应的行数
    pub scroll_step: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            row_height: 1,
            scroll_step: 1,
        }
    }
}

/// 视口状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    offset: u32,
    row_height: u32,
    scroll_step: u32,
    row_count: usize,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            width: 0,
            height: 0,
            offset: 0,
            row_height: config.row_height.max(1),
            scroll_step: config.scroll_step.max(1),
            row_count: 0,
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// 当前滚动偏移（内容空间 y）
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    pub const fn row_height(&self) -> u32 {
        self.row_height
    }

    /// 视口尺寸变化；之后的 `layout` 会使用新宽度
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// 列表长度变化后同步内容高度
    pub fn sync_content(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.clamp_offset();
    }

    /// 内容总高度
    pub fn content_height(&self) -> u32 {
        u32::try_from(self.row_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height().saturating_sub(self.height)
    }

    /// 按行布局：自上而下，宽度等于视口宽度
    pub fn layout(&self, row_count: usize) -> Vec<RowLayout> {
        (0..row_count)
            .map(|position| RowLayout {
                position,
                bounds: Bounds::new(0, self.row_top(position), self.width, self.row_height),
            })
            .collect()
    }

    /// 可滚动区域：所有行的外接矩形
    pub fn scroll_region(rows: &[RowLayout]) -> Bounds {
        rows.iter()
            .fold(Bounds::default(), |acc, row| acc.union(row.bounds))
    }

    /// 滚轮滚动，返回实际移动的单位数（已归一化）
    pub fn scroll(&mut self, delta: WheelDelta) -> i32 {
        let units = delta.normalize();
        self.scroll_by(units);
        units
    }

    /// 按单位滚动，正值向下
    pub fn scroll_by(&mut self, units: i32) {
        let distance = units
            .unsigned_abs()
            .saturating_mul(self.scroll_step)
            .saturating_mul(self.row_height);
        self.offset = if units >= 0 {
            self.offset.saturating_add(distance)
        } else {
            self.offset.saturating_sub(distance)
        };
        self.clamp_offset();
    }

    /// 当前可见（含部分可见）的行范围
    pub fn visible_range(&self) -> Range<usize> {
        if self.row_count == 0 || self.height == 0 {
            return 0..0;
        }
        let first = (self.offset / self.row_height) as usize;
        let last = self.offset.saturating_add(self.height).div_ceil(self.row_height) as usize;
        first.min(self.row_count)..last.min(self.row_count)
    }

    /// 命中测试：视口内的 y 坐标落在哪一行
    pub fn row_at(&self, y: u32) -> Option<usize> {
        if y >= self.height {
            return None;
        }
        let index = (self.offset.saturating_add(y) / self.row_height) as usize;
        (index < self.row_count).then_some(index)
    }

    /// 滚动到使指定行完整可见
    pub fn ensure_visible(&mut self, index: usize) {
        if index >= self.row_count {
            return;
        }
        let top = self.row_top(index);
        let bottom = top.saturating_add(self.row_height);
        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset.saturating_add(self.height) {
            self.offset = bottom.saturating_sub(self.height);
        }
        self.clamp_offset();
    }

    fn row_top(&self, position: usize) -> u32 {
        u32::try_from(position)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u32, height: u32, rows: usize) -> Viewport {
        let mut vp = Viewport::default();
        vp.resize(width, height);
        vp.sync_content(rows);
        vp
    }

    #[test]
    fn wheel_delta_normalizes_by_sign_only() {
        assert_eq!(WheelDelta::Raw(120).normalize(), -1);
        assert_eq!(WheelDelta::Raw(360).normalize(), -1);
        assert_eq!(WheelDelta::Raw(-240).normalize(), 1);
        assert_eq!(WheelDelta::Raw(-1).normalize(), 1);
        assert_eq!(WheelDelta::Raw(0).normalize(), 0);
        assert_eq!(WheelDelta::Up.normalize(), -1);
        assert_eq!(WheelDelta::Down.normalize(), 1);
    }

    #[test]
    fn resize_stretches_every_row_to_viewport_width() {
        let mut vp = viewport(40, 10, 3);
        assert!(vp.layout(3).iter().all(|r| r.bounds.width == 40));

        vp.resize(72, 10);
        let rows = vp.layout(3);
        assert!(rows.iter().all(|r| r.bounds.width == 72));
        assert!(rows.iter().all(|r| r.bounds.height == 1));
    }

    #[test]
    fn scroll_region_is_union_of_rows() {
        let mut vp = Viewport::new(ViewportConfig {
            row_height: 3,
            scroll_step: 1,
        });
        vp.resize(50, 5);
        let rows = vp.layout(4);

        let region = Viewport::scroll_region(&rows);

        assert_eq!(region, Bounds::new(0, 0, 50, 12));
        let manual = rows
            .iter()
            .skip(1)
            .fold(rows[0].bounds, |acc, r| acc.union(r.bounds));
        assert_eq!(region, manual);
    }

    #[test]
    fn scroll_region_of_empty_list_is_empty() {
        assert_eq!(Viewport::scroll_region(&[]), Bounds::default());
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut vp = viewport(20, 4, 10);

        assert_eq!(vp.scroll(WheelDelta::Up), -1);
        assert_eq!(vp.offset(), 0);

        for _ in 0..20 {
            vp.scroll(WheelDelta::Down);
        }
        assert_eq!(vp.offset(), 6);

        vp.scroll(WheelDelta::Raw(120));
        assert_eq!(vp.offset(), 5);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut vp = viewport(20, 10, 3);
        vp.scroll(WheelDelta::Down);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut vp = viewport(20, 4, 10);
        vp.scroll_by(6);
        assert_eq!(vp.offset(), 6);

        vp.sync_content(5);
        assert_eq!(vp.offset(), 1);
    }

    #[test]
    fn visible_range_and_hit_test() {
        let mut vp = viewport(20, 3, 10);
        vp.scroll_by(2);

        assert_eq!(vp.visible_range(), 2..5);
        assert_eq!(vp.row_at(0), Some(2));
        assert_eq!(vp.row_at(2), Some(4));
        assert_eq!(vp.row_at(3), None);
    }

    #[test]
    fn hit_test_below_last_row_misses() {
        let vp = viewport(20, 10, 2);
        assert_eq!(vp.row_at(1), Some(1));
        assert_eq!(vp.row_at(2), None);
    }

    #[test]
    fn ensure_visible_scrolls_both_ways() {
        let mut vp = viewport(20, 3, 10);

        vp.ensure_visible(7);
        assert_eq!(vp.offset(), 5);
        assert!(vp.visible_range().contains(&7));

        vp.ensure_visible(1);
        assert_eq!(vp.offset(), 1);
    }
}
