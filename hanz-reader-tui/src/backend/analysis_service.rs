//! 分析服务桥接
//!
//! 主循环是同步的；请求在 tokio 运行时中执行，结果通过无界通道以
//! `AppMessage::AnalysisFinished` 发回主循环。

use std::sync::Arc;

use hanz_reader_client::{AnalysisBackend, AnalysisError, Submission};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;

/// 把提交交给后台执行
pub struct AnalysisService {
    backend: Arc<dyn AnalysisBackend>,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl AnalysisService {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        handle: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            backend,
            handle,
            tx,
        }
    }

    /// 在后台执行一次分析，完成后发送 `AnalysisFinished`
    ///
    /// 每次提交恰好发回一条消息；后端任务 panic 也会作为传输失败发回，
    /// 保证加载状态能被清除。
    pub fn dispatch(&self, submission: Submission) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let Submission { id, request } = submission;

        tracing::info!(
            "Submission {id} -> {} ({})",
            request.path(),
            backend.id()
        );

        self.handle.spawn(async move {
            let call = tokio::spawn(async move { backend.analyze(&request).await });

            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Analysis task for submission {id} failed: {e}");
                    Err(AnalysisError::transport(format!("analysis task failed: {e}")))
                }
            };

            if let Err(e) = &outcome {
                tracing::warn!("Submission {id} failed: {e}");
            }

            if tx.send(AppMessage::AnalysisFinished { id, outcome }).is_err() {
                tracing::debug!("UI closed before submission {id} finished");
            }
        });
    }
}
