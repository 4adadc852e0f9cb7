use crate::store::error::StoreError;
use thiserror::Error;

/// # Summary
/// 过滤器管理中可能发生的错误。
///
/// # Invariants
/// - `NameConflict` 与 `Validation` 是可恢复的用户输入错误，调用方应保留输入供修正。
#[derive(Error, Debug)]
pub enum FilterError {
    /// 同名过滤器已存在
    #[error("过滤器名称已存在: {0}")]
    NameConflict(String),
    /// 必填字段缺失或非法
    #[error("参数校验失败: {0}")]
    Validation(String),
    /// 底层持久化失败
    #[error(transparent)]
    Store(#[from] StoreError),
}
