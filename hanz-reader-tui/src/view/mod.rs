//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     ┌───────────────────────────────────────────┐
//!     │ 标题栏                                     │
//!     ├───────────────────────────────────────────┤
//!     │ [ URL ]  Text          模式选项卡           │
//!     ├───────────────────────────────────────────┤
//!     │ 输入区（网址单行 / 文本多行）                │
//!     ├───────────────────────────────────────────┤
//!     │ 结果区：加载中 / 错误 / 统计 + 覆盖率条      │
//!     ├───────────────────────────────────────────┤
//!     │ 状态栏（快捷键提示 + 状态消息）              │
//!     └───────────────────────────────────────────┘
//!
//!     帮助弹窗绘制在最上层。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
