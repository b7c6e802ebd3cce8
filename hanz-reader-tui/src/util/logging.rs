//! 文件日志
//!
//! 客户端库通过 `log` 门面输出，`tracing-subscriber` 的 `init()` 会一并安装
//! `LogTracer`，两路日志最终写进同一个文件。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE_NAME: &str = "hanz-reader-tui.log";

/// 初始化文件日志
///
/// 日志写入 `{log_dir}/hanz-reader-tui.log`。级别优先取 `RUST_LOG`，
/// 否则使用 `level`（debug、info、warn、error）。
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = default_filter(level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(
        "Hanz Reader logging initialized (log_path={})",
        log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// 本程序和客户端库使用同一级别，其余依赖只记录警告
fn default_filter(level: &str) -> String {
    format!("warn,hanz_reader={level},hanz_reader_client={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = default_filter("debug");
        assert!(filter.contains("hanz_reader_client=debug"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
