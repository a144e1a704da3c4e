//! 输入框状态
//!
//! 光标以字符（而非字节）为单位，保证多字节文本可以安全编辑。

/// 输入框状态机
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputState {
    /// 输入框为空
    #[default]
    Idle,
    /// 正在输入
    Composing {
        buffer: String,
        /// 光标位置（字符索引）
        cursor: usize,
    },
}

impl InputState {
    /// 当前文本
    pub fn text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Composing { buffer, .. } => buffer,
        }
    }

    /// 光标位置（字符索引）
    pub fn cursor(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Composing { cursor, .. } => *cursor,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// 在光标处插入字符
    pub fn insert(&mut self, c: char) {
        match self {
            Self::Idle => {
                *self = Self::Composing {
                    buffer: c.to_string(),
                    cursor: 1,
                };
            }
            Self::Composing { buffer, cursor } => {
                let at = byte_index(buffer, *cursor);
                buffer.insert(at, c);
                *cursor += 1;
            }
        }
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if let Self::Composing { buffer, cursor } = self {
            if *cursor == 0 {
                return;
            }
            let at = byte_index(buffer, *cursor - 1);
            buffer.remove(at);
            *cursor -= 1;
        }
        self.settle();
    }

    /// 删除光标后的字符
    pub fn delete(&mut self) {
        if let Self::Composing { buffer, cursor } = self {
            if *cursor < buffer.chars().count() {
                let at = byte_index(buffer, *cursor);
                buffer.remove(at);
            }
        }
        self.settle();
    }

    pub fn move_left(&mut self) {
        if let Self::Composing { cursor, .. } = self {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if let Self::Composing { buffer, cursor } = self {
            *cursor = (*cursor + 1).min(buffer.chars().count());
        }
    }

    pub fn move_home(&mut self) {
        if let Self::Composing { cursor, .. } = self {
            *cursor = 0;
        }
    }

    pub fn move_end(&mut self) {
        if let Self::Composing { buffer, cursor } = self {
            *cursor = buffer.chars().count();
        }
    }

    /// 清空输入框，回到 `Idle`
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// 文本被删空后回到 `Idle`
    fn settle(&mut self) {
        if matches!(self, Self::Composing { buffer, .. } if buffer.is_empty()) {
            *self = Self::Idle;
        }
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(index, _)| index)
}
