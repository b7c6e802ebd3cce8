//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod analyzer;       // 分析页面状态（实现 ViewPort）
//!         mod input;          // 输入框状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub analyzer: AnalysisController<AnalyzerView>,
//!             pub show_help: bool,
//!             pub status_message: Option<String>,
//!             pub config: AppConfig,
//!             pub tick: usize,
//!         }
//!
//!     模式、提交编号与“是否有请求在途”由 hanz-reader-client 的
//!     AnalysisController 持有，App 不再重复保存。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、分析页面状态（AnalyzerView）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     控制器只通过 ViewPort 的 setter 写入：
//!         show_input_section / focus_input / set_active_mode
//!         set_loading / set_error / set_results
//!
//!     View 层读取这些字段来决定显示加载、错误还是结果。
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::ToggleMode
//!             ↓
//!         update/mod.rs 调用 app.analyzer.set_mode(..)
//!             ↓
//!         控制器写入 AnalyzerView，View 层切换输入区与选项卡高亮
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、输入框（TextInput）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     网址为单行输入框，文本为多行输入框。
//!     光标按字符保存，渲染时按 unicode 宽度换算成终端列。
//!

mod analyzer;
mod app;
mod input;

pub use analyzer::AnalyzerView;
pub use app::App;
pub use input::TextInput;
