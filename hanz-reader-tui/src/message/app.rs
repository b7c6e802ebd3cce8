//! 应用主消息枚举

use hanz_reader_client::{AnalysisError, AnalysisResult, InputMode};

use super::InputMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在网址与文本模式间切换
    ToggleMode,

    /// 选择指定模式
    SelectMode(InputMode),

    /// 提交当前输入进行分析
    Submit,

    /// 输入框编辑
    Input(InputMessage),

    /// 清空当前输入框
    ClearInput,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 切换主题
    CycleTheme,

    /// 切换语言
    CycleLanguage,

    /// 后台分析结束
    AnalysisFinished {
        id: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    },

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
