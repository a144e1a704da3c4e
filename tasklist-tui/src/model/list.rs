//! 任务列表的选中状态

/// 键盘选中项
///
/// 只保存索引；列表长度由 `TaskListService` 决定，每次使用前都会按长度钳制。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    pub selected: usize,
}

impl ListState {
    /// 当前选中项，列表为空时为 `None`
    pub fn current(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn select_previous(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected.saturating_add(1), len);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    pub fn page_up(&mut self, page: usize, len: usize) {
        self.select(self.selected.saturating_sub(page.max(1)), len);
    }

    pub fn page_down(&mut self, page: usize, len: usize) {
        self.select(self.selected.saturating_add(page.max(1)), len);
    }

    /// 列表变短后钳制选中项
    pub fn clamp(&mut self, len: usize) {
        self.select(self.selected, len);
    }
}
