//! 输入框编辑消息

/// 作用于获得焦点的输入框
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// 输入字符
    Char(char),
    /// 粘贴文本
    Paste(String),
    /// 换行（仅文本模式）
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}
