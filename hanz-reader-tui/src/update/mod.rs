//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod input;              // 输入框编辑
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!
//!
//!     需要副作用（网络请求、写配置文件）时，update 不直接执行，
//!     而是返回一个 Command，由主循环（app.rs）交给 Backend 层。
//!     这样 update 本身保持同步、可测试。
//!
//!         Command::Analyze(submission)    // 发起分析请求
//!         Command::SaveConfig             // 保存 app.config
//!
//!
//! Update 完成后，控制权返回主循环。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod input;

use hanz_reader_client::{AnalysisError, Submission, SubmitOutcome};

use crate::i18n::{set_language, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::set_theme;

/// 需要主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 在后台执行分析
    Analyze(Submission),
    /// 保存当前配置
    SaveConfig,
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleMode => {
            let next = app.analyzer.mode().toggled();
            app.analyzer.set_mode(next);
        }

        AppMessage::SelectMode(mode) => {
            app.analyzer.set_mode(mode);
        }

        AppMessage::Submit => return submit(app),

        AppMessage::Input(input_msg) => {
            input::update(app, input_msg);
        }

        AppMessage::ClearInput => {
            app.analyzer.view_mut().focused_input_mut().clear();
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::CycleTheme => {
            app.config.theme = app.config.theme.next();
            set_theme(app.config.theme);
            app.set_status(t().status_bar.theme_changed);
            return Some(Command::SaveConfig);
        }

        AppMessage::CycleLanguage => {
            let language = app.config.language().next();
            app.config.language = language.code().to_string();
            set_language(language);
            app.set_status(t().status_bar.language_changed);
            return Some(Command::SaveConfig);
        }

        AppMessage::AnalysisFinished { id, outcome } => {
            match app.analyzer.complete_submit(id, outcome) {
                Some(SubmitOutcome::Rendered) => app.set_status(t().status_bar.done),
                Some(SubmitOutcome::Failed(_)) => app.set_status(t().status_bar.failed),
                // 过期的结果，忽略
                Some(SubmitOutcome::Ignored) | None => {}
            }
        }

        AppMessage::Noop => {}
    }

    None
}

/// 提交当前输入
fn submit(app: &mut App) -> Option<Command> {
    match app.analyzer.begin_submit() {
        Ok(submission) => {
            app.set_status(t().status_bar.analyzing);
            Some(Command::Analyze(submission))
        }
        Err(AnalysisError::SubmissionInFlight) => {
            app.set_status(t().status_bar.busy);
            None
        }
        // 空输入：控制器已显示错误
        Err(_) => {
            app.clear_status();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use hanz_reader_client::{AnalysisRequest, AnalysisResult, InputMode};

    use super::*;
    use crate::message::InputMessage;
    use crate::view::theme::Theme;

    fn type_text(app: &mut App, text: &str) {
        update(app, AppMessage::Input(InputMessage::Paste(text.to_string())));
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            total_tokens: 42,
            hsk_1_coverage: 0.9,
            unknown_coverage: 0.1,
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn toggle_mode_switches_section_and_focus() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleMode);
        assert_eq!(app.analyzer.mode(), InputMode::Text);
        assert_eq!(app.view().visible_section, InputMode::Text);
        assert_eq!(app.view().focused, InputMode::Text);
        assert_eq!(app.view().active_mode, InputMode::Text);

        update(&mut app, AppMessage::SelectMode(InputMode::Url));
        assert_eq!(app.view().active_mode, InputMode::Url);
    }

    #[test]
    fn typing_goes_to_the_focused_input() {
        let mut app = App::default();
        type_text(&mut app, "http://a.cn");
        update(&mut app, AppMessage::ToggleMode);
        type_text(&mut app, "你好");
        update(&mut app, AppMessage::Input(InputMessage::Newline));
        type_text(&mut app, "世界");

        assert_eq!(app.view().url_input.value(), "http://a.cn");
        assert_eq!(app.view().text_input.value(), "你好\n世界");
    }

    #[test]
    fn submit_returns_analyze_command_and_shows_loading() {
        let mut app = App::default();
        type_text(&mut app, "  http://example.com ");

        let cmd = update(&mut app, AppMessage::Submit);
        assert!(
            matches!(
                &cmd,
                Some(Command::Analyze(Submission { request: AnalysisRequest::ByUrl { url }, .. }))
                    if url == "http://example.com"
            ),
            "unexpected command: {cmd:?}"
        );
        assert!(app.view().loading);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn empty_submit_shows_error_without_command() {
        let mut app = App::default();
        let cmd = update(&mut app, AppMessage::Submit);
        assert_eq!(cmd, None);
        assert_eq!(app.view().error.as_deref(), Some("Please enter a URL"));
        assert!(!app.view().loading);
    }

    #[test]
    fn second_submit_while_running_is_ignored() {
        let mut app = App::default();
        type_text(&mut app, "http://example.com");
        assert!(update(&mut app, AppMessage::Submit).is_some());
        assert_eq!(update(&mut app, AppMessage::Submit), None);
        assert!(app.view().loading);
    }

    #[test]
    fn finished_analysis_renders_results() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleMode);
        type_text(&mut app, "我是学生。");

        let Some(Command::Analyze(submission)) = update(&mut app, AppMessage::Submit) else {
            unreachable!("submit should produce a command");
        };
        update(
            &mut app,
            AppMessage::AnalysisFinished {
                id: submission.id,
                outcome: Ok(sample_result()),
            },
        );

        let view = app.view();
        assert!(!view.loading);
        assert!(view.error.is_none());
        assert!(
            matches!(&view.results, Some(r) if r.tokens == "42" && r.source == "Raw Text Input"),
            "unexpected results: {:?}",
            view.results
        );
    }

    #[test]
    fn failed_analysis_shows_server_detail() {
        let mut app = App::default();
        type_text(&mut app, "http://bad.example");
        let Some(Command::Analyze(submission)) = update(&mut app, AppMessage::Submit) else {
            unreachable!("submit should produce a command");
        };

        update(
            &mut app,
            AppMessage::AnalysisFinished {
                id: submission.id,
                outcome: Err(AnalysisError::RequestFailed {
                    status: 400,
                    message: "Could not fetch URL".into(),
                }),
            },
        );

        assert_eq!(app.view().error.as_deref(), Some("Could not fetch URL"));
        assert!(app.view().results.is_none());
        assert!(!app.view().loading);
    }

    #[test]
    fn stale_finish_is_ignored() {
        let mut app = App::default();
        update(
            &mut app,
            AppMessage::AnalysisFinished {
                id: 99,
                outcome: Ok(sample_result()),
            },
        );
        assert!(app.view().results.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn clear_input_empties_only_the_focused_field() {
        let mut app = App::default();
        type_text(&mut app, "http://a.cn");
        update(&mut app, AppMessage::ToggleMode);
        type_text(&mut app, "文本");
        update(&mut app, AppMessage::ClearInput);

        assert!(app.view().text_input.is_empty());
        assert_eq!(app.view().url_input.value(), "http://a.cn");
    }

    #[test]
    fn cycle_theme_updates_config_and_requests_save() {
        let mut app = App::default();
        assert_eq!(app.config.theme, Theme::Dark);
        let cmd = update(&mut app, AppMessage::CycleTheme);
        assert_eq!(cmd, Some(Command::SaveConfig));
        assert_eq!(app.config.theme, Theme::Light);
    }

    #[test]
    fn cycle_language_updates_config_and_requests_save() {
        let mut app = App::default();
        let cmd = update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(cmd, Some(Command::SaveConfig));
        assert_eq!(app.config.language, "zh-CN");
        update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(app.config.language, "en-US");
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.show_help);
        update(&mut app, AppMessage::CloseHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
