//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲与回显，每个按键立即生效
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容
//!         · Bracketed Paste（括号粘贴）
//!             - 粘贴的整段文本作为一个 Event::Paste 到达，而不是一串按键
//!               粘贴中文长文时不会被逐字符误判为快捷键
//!
//!     恢复终端：
//!         无论 app::run 成功与否都必须调用 restore_terminal()，
//!         否则终端会保持在原始模式。
//!
//!     日志：
//!         stdout 被 UI 占用，日志只写入文件：
//!             {config_dir}/hanz-reader-tui/hanz-reader-tui.log
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
