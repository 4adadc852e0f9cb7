use earnings_core::filter::entity::Filter;
use earnings_core::filter::error::FilterError;
use earnings_core::store::port::FilterRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// 一次删除的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// 实际删除的数量
    pub removed: usize,
    /// 删除后剩余的数量
    pub remaining: usize,
}

/// # Summary
/// 过滤器注册表，持有当前列表的内存快照并在每次变更后整体落盘。
///
/// # Invariants
/// - 列表中的名称两两不同。
/// - 变更流程为"构造新列表 → 持久化 → 替换快照"，写锁贯穿整个流程：
///   并发读者只会看到完整的旧列表或新列表，持久化失败时快照保持不变。
pub struct FilterStore {
    // 持久化接口
    repository: Arc<dyn FilterRepository>,
    // 当前列表快照（存储顺序）
    filters: RwLock<Vec<Filter>>,
}

impl FilterStore {
    /// # Summary
    /// 初始化注册表：从仓储读取列表，未初始化的存储视为空列表。
    ///
    /// # Arguments
    /// * `repository` - 持久化接口的具体实现。
    ///
    /// # Returns
    /// * `Result<Arc<Self>, FilterError>` - 可共享的注册表实例，仓储故障返回 `FilterError::Store`。
    pub async fn load(repository: Arc<dyn FilterRepository>) -> Result<Arc<Self>, FilterError> {
        let filters = repository.load().await?.unwrap_or_default();
        info!("Filter store loaded with {} filters", filters.len());

        Ok(Arc::new(Self {
            repository,
            filters: RwLock::new(filters),
        }))
    }

    /// 返回当前全部过滤器（存储顺序）
    pub async fn list(&self) -> Vec<Filter> {
        self.filters.read().await.clone()
    }

    /// 按名称精确查找
    pub async fn find(&self, name: &str) -> Option<Filter> {
        self.filters
            .read()
            .await
            .iter()
            .find(|f| f.name == name)
            .cloned()
    }

    /// # Summary
    /// 新增过滤器。
    ///
    /// # Logic
    /// 1. 获取写锁。
    /// 2. 名称已存在则返回 `NameConflict`，列表不变。
    /// 3. 追加到列表末尾并整体持久化。
    /// 4. 持久化成功后替换快照。
    ///
    /// # Arguments
    /// * `filter` - 已通过 `Filter::new` 校验的过滤器。
    ///
    /// # Returns
    /// * `Result<(), FilterError>`
    pub async fn add(&self, filter: Filter) -> Result<(), FilterError> {
        let mut guard = self.filters.write().await;
        if guard.iter().any(|f| f.name == filter.name) {
            return Err(FilterError::NameConflict(filter.name));
        }

        let name = filter.name.clone();
        let mut next = guard.clone();
        next.push(filter);
        self.repository.save(&next).await?;

        info!("Filter added: {}", name);
        *guard = next;
        Ok(())
    }

    /// # Summary
    /// 删除名称在 `names` 中的所有过滤器。
    ///
    /// # Logic
    /// 1. 名称按 `Filter::new` 的规则去除首尾空白。
    /// 2. 获取写锁并过滤掉命中的条目，不存在的名称直接忽略。
    /// 3. 整体持久化结果列表后替换快照。
    ///
    /// # Arguments
    /// * `names` - 待删除的名称集合。
    ///
    /// # Returns
    /// * `Result<DeleteOutcome, FilterError>` - 删除与剩余数量（同一写锁内统计），只有仓储故障会返回错误。
    pub async fn delete<S: AsRef<str>>(&self, names: &[S]) -> Result<DeleteOutcome, FilterError> {
        let names: HashSet<&str> = names.iter().map(|n| n.as_ref().trim()).collect();

        let mut guard = self.filters.write().await;
        let next: Vec<Filter> = guard
            .iter()
            .filter(|f| !names.contains(f.name.as_str()))
            .cloned()
            .collect();
        let removed = guard.len() - next.len();

        self.repository.save(&next).await?;

        if removed > 0 {
            info!("Deleted {} filters", removed);
        }
        *guard = next;
        Ok(DeleteOutcome {
            removed,
            remaining: guard.len(),
        })
    }
}
