//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘 / 粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!
//!     · handle_event    事件分发
//!         Event::Key(KeyEvent)      键盘事件
//!         Event::Paste(String)      粘贴的整段文本
//!         Event::Resize(..)         终端大小变化，下一帧自动重绘
//!
//!         键盘事件的判断顺序：
//!             - 帮助弹窗打开时，只处理关闭 / 退出
//!             - 全局快捷键（退出、帮助、主题、语言）
//!             - 模式切换（Tab、Alt+1、Alt+2）
//!             - 提交（Ctrl+s）与清空（Esc）
//!             - 其余按键交给获得焦点的输入框；
//!               Enter 在网址模式下提交，在文本模式下换行
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
