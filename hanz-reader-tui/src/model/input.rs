//! 文本输入框状态
//!
//! 光标以字符（char）为单位保存，渲染时再换算成终端列宽；
//! 中日韩字符占两列，由 `unicode-width` 计算。

use unicode_width::UnicodeWidthStr;

/// 可编辑的输入框
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// 光标位置（字符索引，0..=字符数）
    cursor: usize,
    /// 是否允许换行
    multiline: bool,
}

impl TextInput {
    /// 单行输入框
    pub fn single_line() -> Self {
        Self::default()
    }

    /// 多行输入框
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// 在光标处插入字符
    pub fn insert(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        if ch.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// 在光标处插入一段文本（粘贴）
    ///
    /// 单行输入框丢弃换行；多行输入框把 `\r\n` 和 `\r` 统一为 `\n`。
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for ch in normalized.chars() {
            if ch == '\n' && !self.multiline {
                continue;
            }
            self.insert(ch);
        }
    }

    /// 换行（单行输入框忽略）
    pub fn insert_newline(&mut self) {
        if !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, '\n');
        self.cursor += 1;
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// 删除光标处的字符
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// 移到当前行行首
    pub fn move_home(&mut self) {
        let (row, _) = self.cursor_line_col();
        self.cursor = self.line_start(row);
    }

    /// 移到当前行行尾
    pub fn move_end(&mut self) {
        let (row, _) = self.cursor_line_col();
        self.cursor = self.line_start(row) + self.line_len(row);
    }

    /// 上移一行，列按字符数保持（不超过目标行长度）
    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_line_col();
        if row == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.line_start(row - 1) + col.min(self.line_len(row - 1));
    }

    /// 下移一行
    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_line_col();
        if row + 1 >= self.line_count() {
            self.cursor = self.char_count();
            return;
        }
        self.cursor = self.line_start(row + 1) + col.min(self.line_len(row + 1));
    }

    /// 光标所在的（行, 终端列宽）
    pub fn cursor_position(&self) -> (usize, usize) {
        let (row, col) = self.cursor_line_col();
        let line_prefix: String = self
            .value
            .split('\n')
            .nth(row)
            .unwrap_or_default()
            .chars()
            .take(col)
            .collect();
        (row, line_prefix.width())
    }

    pub fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// 字符索引 -> 字节索引
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// 光标所在的（行, 行内字符列）
    fn cursor_line_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for ch in self.value.chars().take(self.cursor) {
            if ch == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// 第 `row` 行首字符的字符索引
    fn line_start(&self, row: usize) -> usize {
        self.value
            .split('\n')
            .take(row)
            .map(|line| line.chars().count() + 1)
            .sum()
    }

    fn line_len(&self, row: usize) -> usize {
        self.value
            .split('\n')
            .nth(row)
            .map_or(0, |line| line.chars().count())
    }
}
