//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**
//! 3. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 分析服务返回的错误消息（如 "Please enter a URL"）原样显示，不在此翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 模式选项卡
    pub tabs: TabTexts,
    /// 输入区
    pub input: InputTexts,
    /// 结果区
    pub results: ResultsTexts,
    /// 状态栏消息
    pub status_bar: StatusBarTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 模式选项卡
// ============================================================================

pub struct TabTexts {
    pub url: &'static str,
    pub text: &'static str,
}

// ============================================================================
// 输入区
// ============================================================================

pub struct InputTexts {
    pub url_title: &'static str,
    pub text_title: &'static str,
    pub url_placeholder: &'static str,
    pub text_placeholder: &'static str,
}

// ============================================================================
// 结果区
// ============================================================================

pub struct ResultsTexts {
    pub title: &'static str,
    pub analyzing: &'static str,
    pub empty_hint_url: &'static str,
    pub empty_hint_text: &'static str,
    pub error_title: &'static str,
    pub source: &'static str,
    pub score: &'static str,
    pub tokens: &'static str,
    pub unknown_coverage: &'static str,
    pub coverage: &'static str,
    /// 覆盖率条中“未知”一行的标签
    pub unknown_level: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub analyzing: &'static str,
    pub busy: &'static str,
    pub done: &'static str,
    pub failed: &'static str,
    pub theme_changed: &'static str,
    pub language_changed: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub tab: &'static str,
    pub enter: &'static str,
    pub ctrl_s: &'static str,
    pub esc: &'static str,
    pub alt_h: &'static str,
    pub alt_q: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub switch_mode: &'static str,
    pub analyze: &'static str,
    pub newline: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub shortcuts: &'static [(&'static str, &'static str)],
    pub close_hint: &'static str,
}
