//! 应用主状态结构

use hanz_reader_client::AnalysisController;

use super::AnalyzerView;
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 分析控制器，持有当前模式与分析页面状态
    pub analyzer: AnalysisController<AnalyzerView>,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前配置（主题、语言切换后写回）
    pub config: AppConfig,

    /// 帧计数，用于加载动画
    pub tick: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        let analyzer = AnalysisController::new(AnalyzerView::new())
            .with_target_level(config.target_level.clone());

        Self {
            should_quit: false,
            analyzer,
            show_help: false,
            status_message: None,
            config,
            tick: 0,
        }
    }

    /// 分析页面状态
    pub fn view(&self) -> &AnalyzerView {
        self.analyzer.view()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use hanz_reader_client::InputMode;

    use super::*;

    #[test]
    fn new_app_forwards_target_level_to_controller() {
        let config = AppConfig {
            target_level: Some("HSK1".into()),
            ..AppConfig::default()
        };
        let app = App::new(config);
        assert_eq!(app.analyzer.target_level(), Some("HSK1"));
    }

    #[test]
    fn new_app_starts_in_url_mode() {
        let app = App::default();
        assert_eq!(app.analyzer.mode(), InputMode::Url);
        assert!(app.status_message.is_none());
        assert!(app.config.target_level.is_none());
    }
}
