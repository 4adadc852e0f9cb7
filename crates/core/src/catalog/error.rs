use thiserror::Error;

/// # Summary
/// 股票代码清单加载错误。
///
/// 对清单本身是致命的，对应用其余部分不是：调用方记录日志后使用空清单继续运行。
#[derive(Error, Debug)]
pub enum CatalogError {
    /// 文件不存在或无法读取
    #[error("Failed to read catalog file: {0}")]
    Io(String),
    /// 表头中没有 `Symbol` 列
    #[error("Catalog header has no '{0}' column")]
    MissingColumn(String),
    /// 记录无法解析
    #[error("Malformed catalog record: {0}")]
    Malformed(String),
}
