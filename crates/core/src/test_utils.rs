//! 供下游 crate 测试使用的端口替身，通过 `test-utils` feature 启用。

use crate::calendar::error::FetchError;
use crate::calendar::port::EarningsFeed;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// # Summary
/// 可编程的财报数据源替身。
///
/// # Invariants
/// - 记录每次请求的日期，便于断言"只发出一次请求"。
/// - `fail_with` 设置后所有请求返回该错误，直到 `respond_with` 重新设置响应。
pub struct MockEarningsFeed {
    response: Mutex<Result<Value, String>>,
    requests: Mutex<Vec<NaiveDate>>,
}

impl MockEarningsFeed {
    /// 使用给定的上游 JSON 创建替身
    pub fn new(response: Value) -> Self {
        Self {
            response: Mutex::new(Ok(response)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 按 `data.rows` 结构包装若干行
    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self::new(json!({ "data": { "rows": rows }, "message": null }))
    }

    pub async fn respond_with(&self, response: Value) {
        *self.response.lock().await = Ok(response);
    }

    /// 后续请求全部以网络错误失败
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.response.lock().await = Err(message.into());
    }

    /// 已收到的请求日期（按时间顺序）
    pub async fn requests(&self) -> Vec<NaiveDate> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl EarningsFeed for MockEarningsFeed {
    async fn fetch_calendar(&self, date: NaiveDate) -> Result<Value, FetchError> {
        self.requests.lock().await.push(date);
        self.response
            .lock()
            .await
            .clone()
            .map_err(FetchError::Network)
    }
}
