use async_trait::async_trait;
use earnings_core::filter::entity::Filter;
use earnings_core::store::error::StoreError;
use earnings_core::store::port::FilterRepository;
use tokio::sync::RwLock;

/// # Summary
/// 基于内存的过滤器仓储实现，进程退出即丢失。
///
/// 用于测试以及不需要持久化的临时运行。
#[derive(Default)]
pub struct MemoryFilterRepository {
    entry: RwLock<Option<Vec<Filter>>>,
}

impl MemoryFilterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有列表预置存储内容
    pub fn with_filters(filters: Vec<Filter>) -> Self {
        Self {
            entry: RwLock::new(Some(filters)),
        }
    }
}

#[async_trait]
impl FilterRepository for MemoryFilterRepository {
    async fn load(&self) -> Result<Option<Vec<Filter>>, StoreError> {
        Ok(self.entry.read().await.clone())
    }

    async fn save(&self, filters: &[Filter]) -> Result<(), StoreError> {
        *self.entry.write().await = Some(filters.to_vec());
        Ok(())
    }
}
