//! 输入框编辑

use crate::message::InputMessage;
use crate::model::App;

/// 把编辑消息应用到获得焦点的输入框
pub fn update(app: &mut App, msg: InputMessage) {
    let input = app.analyzer.view_mut().focused_input_mut();

    match msg {
        InputMessage::Char(ch) => input.insert(ch),
        InputMessage::Paste(text) => input.insert_str(&text),
        InputMessage::Newline => input.insert_newline(),
        InputMessage::Backspace => input.backspace(),
        InputMessage::Delete => input.delete(),
        InputMessage::Left => input.move_left(),
        InputMessage::Right => input.move_right(),
        InputMessage::Up => input.move_up(),
        InputMessage::Down => input.move_down(),
        InputMessage::Home => input.move_home(),
        InputMessage::End => input.move_end(),
    }
}
