//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod input;          // 输入框编辑子消息
//!
//!
//!     消息有两个来源：
//!         · 键盘 / 粘贴事件      event/handler.rs 翻译而来
//!         · 后台分析任务完成      backend/analysis_service.rs 通过通道发回
//!                                 AppMessage::AnalysisFinished { id, outcome }
//!
//!     两者都在 app.rs 的主循环中交给 update::update 处理。
//!

mod app;
mod input;

pub use app::AppMessage;
pub use input::InputMessage;
