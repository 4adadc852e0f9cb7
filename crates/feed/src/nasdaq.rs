use async_trait::async_trait;
use chrono::NaiveDate;
use earnings_core::calendar::error::FetchError;
use earnings_core::calendar::port::EarningsFeed;
use earnings_core::common::format_date;
use earnings_core::config::FeedConfig;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

/// # Summary
/// Nasdaq 财报日历数据提供者实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯，客户端在实例间共享连接池。
/// - 每次 `fetch_calendar` 只发出一个 GET 请求，不重试。
#[derive(Clone)]
pub struct NasdaqProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// 上游接口地址，日期以 `date` 查询参数追加
    base_url: String,
}

impl NasdaqProvider {
    /// # Summary
    /// 根据配置创建 NasdaqProvider。
    ///
    /// # Logic
    /// 1. 安装 rustls 的 ring 加密后端（已安装则跳过）。
    /// 2. 设置浏览器 User-Agent，上游会拦截缺少该头的请求。
    /// 3. 配置请求超时并构建客户端。
    ///
    /// # Arguments
    /// * `config`: 上游接口配置。
    ///
    /// # Returns
    /// 成功返回提供者实例，Header 非法或客户端构建失败返回 `FetchError::Network`。
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            tracing::trace!("rustls crypto provider already installed");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::Network(format!("Invalid User-Agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EarningsFeed for NasdaqProvider {
    async fn fetch_calendar(&self, date: NaiveDate) -> Result<Value, FetchError> {
        let date = format_date(date);
        tracing::debug!("Fetching earnings calendar for {}", date);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("date", date.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("Earnings calendar upstream returned {} for {}", status, date);
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
