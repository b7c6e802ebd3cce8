//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责：
//!     mod analysis_service;   // 在 tokio 运行时中执行分析请求
//!     mod config_service;     // 配置持久化（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Enter / Ctrl+s
//!         ↓
//!     Update 层调用 AnalysisController::begin_submit()，返回 Command::Analyze
//!         ↓
//!     主循环调用 AnalysisService::dispatch(submission)
//!         ↓
//!     后台任务调用 HttpAnalysisBackend::analyze()（hanz-reader-client）
//!         ↓
//!     结果经通道以 AppMessage::AnalysisFinished 发回主循环
//!         ↓
//!     Update 层调用 AnalysisController::complete_submit()
//!         ↓
//!     View 层重新渲染
//!

mod analysis_service;
mod config_service;

pub use analysis_service::AnalysisService;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};

/// 主循环使用的服务集合
pub struct Services {
    pub analysis: AnalysisService,
    pub config: Box<dyn ConfigService>,
}
