//! 统一错误类型定义

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// 切片错误
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ExtractionError {
    /// 文档中没有任何 `<section>` 块
    #[error("no sections found")]
    NoSections,
}

/// 加载错误
///
/// Covers everything between the URL the user typed and a ready
/// [`Presentation`](crate::Presentation).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum LoadError {
    /// URL 为空、无法解析或协议不受支持
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// 网络错误
    #[error("Network error: {0}")]
    Network(String),

    /// 远端返回非 2xx 状态码
    #[error("Failed to fetch: {status}")]
    HttpStatus { status: u16 },

    /// 超时（毫秒）
    #[error("Request timed out ({0} ms)")]
    Timeout(u64),

    /// 页面已取回但没有可用的 section
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl LoadError {
    pub(crate) fn timeout(after: Duration) -> Self {
        Self::Timeout(u64::try_from(after.as_millis()).unwrap_or(u64::MAX))
    }
}

/// 加载 Result 类型别名
pub type LoadResult<T> = std::result::Result<T, LoadError>;
