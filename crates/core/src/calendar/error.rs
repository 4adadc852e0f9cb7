use thiserror::Error;

/// # Summary
/// 上游财报数据获取错误。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - 所有变体均可恢复：调用方保留当前展示的数据并提示用户。
#[derive(Error, Debug)]
pub enum FetchError {
    // 网络层错误（连接失败、超时等）
    #[error("Network error: {0}")]
    Network(String),
    // 上游返回非成功状态码
    #[error("Upstream returned HTTP {0}")]
    Status(u16),
    // 响应体不是合法 JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
