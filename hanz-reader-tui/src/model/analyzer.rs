//! 分析页面的视图状态
//!
//! `AnalyzerView` 是控制器写入的“屏幕”：控制器只通过 `ViewPort` 的
//! setter 修改它，View 层只读取它。

use hanz_reader_client::{InputMode, ResultsModel, ViewPort};

use super::TextInput;

/// 分析页面状态
#[derive(Debug, Clone)]
pub struct AnalyzerView {
    /// 网址输入框（单行）
    pub url_input: TextInput,
    /// 文本输入框（多行）
    pub text_input: TextInput,
    /// 当前可见的输入区
    pub visible_section: InputMode,
    /// 当前获得焦点的输入框
    pub focused: InputMode,
    /// 当前高亮的模式选项卡
    pub active_mode: InputMode,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Option<ResultsModel>,
}

impl AnalyzerView {
    pub fn new() -> Self {
        Self {
            url_input: TextInput::single_line(),
            text_input: TextInput::multi_line(),
            visible_section: InputMode::Url,
            focused: InputMode::Url,
            active_mode: InputMode::Url,
            loading: false,
            error: None,
            results: None,
        }
    }

    pub fn input(&self, mode: InputMode) -> &TextInput {
        match mode {
            InputMode::Url => &self.url_input,
            InputMode::Text => &self.text_input,
        }
    }

    pub fn input_mut(&mut self, mode: InputMode) -> &mut TextInput {
        match mode {
            InputMode::Url => &mut self.url_input,
            InputMode::Text => &mut self.text_input,
        }
    }

    /// 获得焦点的输入框
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        self.input_mut(self.focused)
    }
}

impl Default for AnalyzerView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for AnalyzerView {
    fn input_value(&self, mode: InputMode) -> String {
        self.input(mode).value().to_string()
    }

    fn show_input_section(&mut self, mode: InputMode) {
        self.visible_section = mode;
    }

    fn focus_input(&mut self, mode: InputMode) {
        self.focused = mode;
    }

    fn set_active_mode(&mut self, mode: InputMode) {
        self.active_mode = mode;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    fn set_results(&mut self, results: Option<ResultsModel>) {
        self.results = results;
    }
}
