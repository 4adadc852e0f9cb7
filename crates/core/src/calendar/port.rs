use crate::calendar::error::FetchError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

/// # Summary
/// 财报日历数据提供者接口（原始数据源）。
///
/// # Invariants
/// - 每次调用只发出一个出站请求，不做缓存或重试。
/// - 返回值是上游的完整 JSON，不做结构校验；结构解析由 `EarningsEnvelope` 负责。
#[async_trait]
pub trait EarningsFeed: Send + Sync {
    /// # Summary
    /// 拉取指定日期的财报日历。
    ///
    /// # Logic
    /// 1. 将日期格式化为 `YYYY-MM-DD` 并作为 `date` 查询参数。
    /// 2. 发起请求，非成功状态码视为失败。
    /// 3. 将响应体解析为 JSON。
    ///
    /// # Arguments
    /// * `date`: 财报发布日期。
    ///
    /// # Returns
    /// 成功返回上游 JSON 信封，失败返回 `FetchError`。
    async fn fetch_calendar(&self, date: NaiveDate) -> Result<Value, FetchError>;
}
