//! Hanz Reader TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 分析请求与配置 (`backend/`)
//!
//! 模式切换、提交校验、加载 / 错误 / 结果的显示顺序都由
//! `hanz_reader_client::AnalysisController` 决定；本程序只提供
//! 它写入的终端视图。
//!
//!
//! fn `main()` {
//!
//!     Args::parse()           // 命令行参数
//!     init_logging()          // 日志写入配置目录下的文件
//!     load config             // 配置文件 + 命令行覆盖
//!     tokio runtime           // 后台执行分析请求
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hanz_reader_client::{ClientConfig, HttpAnalysisBackend};
use tokio::sync::mpsc;

use backend::{AnalysisService, AppConfig, ConfigService, LocalConfigService, Services};
use util::{init_logging, init_terminal, restore_terminal};

#[derive(Parser, Debug)]
#[command(name = "hanz-reader")]
#[command(about = "Grade Chinese text and web pages by HSK vocabulary level", version)]
struct Args {
    /// Analysis service base URL (default: http://127.0.0.1:8000)
    #[arg(short, long)]
    server_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Path to the config file (default: <config dir>/hanz-reader-tui/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// 本次运行的连接配置：命令行参数覆盖配置文件
    ///
    /// 只影响本次运行，不写回 `AppConfig`。
    fn client_config(&self, config: &AppConfig) -> ClientConfig {
        let mut client = config.client_config();
        if let Some(url) = &self.server_url {
            client.base_url.clone_from(url);
        }
        if let Some(timeout) = self.timeout {
            client.timeout_secs = timeout;
        }
        client
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. 配置服务与日志
    let config_service = match &args.config {
        Some(path) => LocalConfigService::with_path(path.clone()),
        None => LocalConfigService::new(),
    };
    let _log_guard = init_logging(&config_service.dir(), &args.log_level)?;

    // 2. 加载配置（损坏的配置文件不阻止启动）
    let config = match config_service.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {e:#}");
            AppConfig::default()
        }
    };
    let client_config = args.client_config(&config);
    tracing::info!(
        "Config {} (server_url={}, timeout={}s)",
        config_service.path().display(),
        client_config.base_url,
        client_config.timeout_secs
    );

    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 后台运行时与分析服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let backend = HttpAnalysisBackend::new(client_config)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let services = Services {
        analysis: AnalysisService::new(Arc::new(backend), runtime.handle().clone(), tx),
        config: Box::new(config_service),
    };

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &services, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Application shutting down");

    // 8. 返回结果
    result
}
