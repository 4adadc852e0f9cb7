use super::error::StoreError;
use crate::filter::entity::Filter;
use async_trait::async_trait;

/// # Summary
/// 过滤器列表的持久化接口。
///
/// 整个列表以单个命名空间条目的形式保存，每次写入都整体替换。
///
/// # Invariants
/// - `save` 必须是原子的：后续的 `load` 只能看到旧列表或新列表，不存在中间态。
/// - 存储从未写入过时，`load` 返回 `Ok(None)` 而不是错误。
#[async_trait]
pub trait FilterRepository: Send + Sync {
    /// # Summary
    /// 读取持久化的过滤器列表。
    ///
    /// # Logic
    /// 1. 按命名空间定位条目。
    /// 2. 条目不存在返回 `None`。
    /// 3. 条目内容无法解码时记录警告并视为空列表。
    ///
    /// # Returns
    /// 成功返回存储顺序下的过滤器列表，数据库故障返回 `StoreError`。
    async fn load(&self) -> Result<Option<Vec<Filter>>, StoreError>;

    /// # Summary
    /// 以新列表整体替换持久化内容。
    ///
    /// # Arguments
    /// * `filters`: 完整的过滤器列表。
    ///
    /// # Returns
    /// 操作结果。
    async fn save(&self, filters: &[Filter]) -> Result<(), StoreError>;
}
