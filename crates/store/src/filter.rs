use async_trait::async_trait;
use earnings_core::filter::entity::Filter;
use earnings_core::store::error::StoreError;
use earnings_core::store::port::FilterRepository;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::path::Path;

/// 默认数据库文件名
const DEFAULT_DB_FILE: &str = "app.db";

/// FilterRepository 的 SQLite 实现。
///
/// # Summary
/// 在 `kv_entries` 键值表中以单行保存整个过滤器列表，
/// 键为配置的命名空间，值为 JSON 序列化后的列表。
///
/// # Invariants
/// * 表结构在实例创建时初始化。
/// * 写入使用单条 upsert 语句，读者只能看到完整的旧值或新值。
pub struct SqliteFilterRepository {
    pool: SqlitePool,
    namespace: String,
}

impl SqliteFilterRepository {
    /// 在指定目录下打开（必要时创建）数据库并初始化表结构。
    ///
    /// # Logic
    /// 1. 确保数据目录存在。
    /// 2. 以 `create_if_missing` 打开 `app.db`。
    /// 3. 执行 DDL 创建 `kv_entries` 表。
    ///
    /// # Arguments
    /// * `data_dir` - 数据根目录。
    /// * `namespace` - 过滤器列表的存储键。
    ///
    /// # Returns
    /// * `Result<Self, StoreError>` - 存储实例或初始化错误。
    pub async fn open(data_dir: impl AsRef<Path>, namespace: impl Into<String>) -> Result<Self, StoreError> {
        let root = data_dir.as_ref();
        std::fs::create_dir_all(root).map_err(|e| StoreError::InitError(e.to_string()))?;

        let options = SqliteConnectOptions::new()
            .filename(root.join(DEFAULT_DB_FILE))
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| StoreError::InitError(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_entries (
                namespace TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        let namespace = namespace.into();
        tracing::debug!("Filter repository opened at {:?} (namespace: {})", root, namespace);

        Ok(Self { pool, namespace })
    }

    /// 当前使用的命名空间
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl FilterRepository for SqliteFilterRepository {
    async fn load(&self) -> Result<Option<Vec<Filter>>, StoreError> {
        let raw = sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE namespace = ?")
            .bind(&self.namespace)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Filter>>(&raw) {
            Ok(filters) => Ok(Some(filters)),
            Err(e) => {
                tracing::warn!(
                    "Stored filters under '{}' are unreadable, starting empty: {}",
                    self.namespace,
                    e
                );
                Ok(Some(Vec::new()))
            }
        }
    }

    async fn save(&self, filters: &[Filter]) -> Result<(), StoreError> {
        let value =
            serde_json::to_string(filters).map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            "INSERT INTO kv_entries (namespace, value) VALUES (?, ?)
             ON CONFLICT(namespace) DO UPDATE SET value = excluded.value",
        )
        .bind(&self.namespace)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}
