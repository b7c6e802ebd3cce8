//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = results.try_recv() {        // 取回已完成的后台分析
//!         apply(msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);       // 接收原始事件并分发消息
//!         apply(msg)                                  // 更新状态，执行返回的 Command
//!     }
//! }
//!
//! 网络请求不在主循环中等待：update 返回 Command::Analyze 后交给
//! AnalysisService 在 tokio 运行时中执行，结果下一轮循环再取回。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Services;
use crate::event;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    services: &Services,
    results: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取回已完成的分析
        while let Ok(msg) = results.try_recv() {
            apply(app, services, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            apply(app, services, msg);
        }

        app.tick = app.tick.wrapping_add(1);
    }

    Ok(())
}

/// 更新状态并执行返回的副作用
fn apply(app: &mut App, services: &Services, msg: AppMessage) {
    let Some(command) = update::update(app, msg) else {
        return;
    };

    match command {
        Command::Analyze(submission) => services.analysis.dispatch(submission),
        Command::SaveConfig => {
            if let Err(e) = services.config.save(&app.config) {
                tracing::error!("Failed to save config: {e:#}");
                app.set_status(t().status_bar.config_save_failed);
            }
        }
    }
}
