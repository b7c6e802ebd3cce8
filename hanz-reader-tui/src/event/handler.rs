//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hanz_reader_client::InputMode;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage};
use crate::model::App;

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
        // 粘贴整段文本（需要终端开启 bracketed paste）
        Event::Paste(text) if !app.show_help => AppMessage::Input(InputMessage::Paste(text)),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助弹窗打开时只响应关闭与退出
    if app.show_help {
        return handle_help_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::CYCLE_THEME.matches(&key) {
        return AppMessage::CycleTheme;
    }
    if DefaultKeymap::CYCLE_LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    // 模式切换
    if DefaultKeymap::TOGGLE_MODE.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::ToggleMode;
    }
    if DefaultKeymap::MODE_URL.matches(&key) {
        return AppMessage::SelectMode(InputMode::Url);
    }
    if DefaultKeymap::MODE_TEXT.matches(&key) {
        return AppMessage::SelectMode(InputMode::Text);
    }

    // 提交与清空
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::ClearInput;
    }

    handle_input_keys(key, app.analyzer.mode())
}

/// 处理输入框中的按键
fn handle_input_keys(key: KeyEvent, mode: InputMode) -> AppMessage {
    match key.code {
        // Enter: 网址模式提交，文本模式换行
        KeyCode::Enter => match mode {
            InputMode::Url => AppMessage::Submit,
            InputMode::Text => AppMessage::Input(InputMessage::Newline),
        },

        // 字符输入（忽略 Ctrl / Alt 组合）
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Input(InputMessage::Char(ch))
        }

        KeyCode::Backspace => AppMessage::Input(InputMessage::Backspace),
        KeyCode::Delete => AppMessage::Input(InputMessage::Delete),
        KeyCode::Left => AppMessage::Input(InputMessage::Left),
        KeyCode::Right => AppMessage::Input(InputMessage::Right),
        KeyCode::Up => AppMessage::Input(InputMessage::Up),
        KeyCode::Down => AppMessage::Input(InputMessage::Down),
        KeyCode::Home => AppMessage::Input(InputMessage::Home),
        KeyCode::End => AppMessage::Input(InputMessage::End),

        _ => AppMessage::Noop,
    }
}

/// 处理帮助弹窗中的按键
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::CloseHelp,
        _ if DefaultKeymap::HELP.matches(&key) => AppMessage::CloseHelp,
        _ => AppMessage::Noop,
    }
}
