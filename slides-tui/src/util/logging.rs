//! 日志初始化
//!
//! 终端处于 raw mode 且占用备用屏幕，日志只能写文件。
//! `log` 宏（slides-core 使用）经 tracing-log 桥接到同一个 subscriber。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "section-slides.log";

/// 默认日志路径：`<cache dir>/section-slides/section-slides.log`
fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("section-slides")
        .join(LOG_FILE_NAME)
}

/// 安装全局 subscriber，返回的 guard 必须存活到程序退出
pub fn init_logging(path: Option<&Path>) -> Result<WorkerGuard> {
    let path = path.map_or_else(default_log_path, Path::to_path_buf);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(guard)
}
