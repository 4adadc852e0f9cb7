use crate::filter::FilterStore;
use chrono::NaiveDate;
use earnings_core::calendar::entity::{CalendarRow, EarningsEnvelope};
use earnings_core::calendar::error::FetchError;
use earnings_core::calendar::port::EarningsFeed;
use earnings_core::filter::entity::Filter;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// # Summary
/// 财报日历查询服务。
///
/// 不持有任何持久状态：结果只取决于调用时的日期、过滤器注册表内容和上游响应。
///
/// # Invariants
/// - 每次查询只向上游发出一个请求。
/// - 返回行保持上游顺序。
pub struct CalendarService {
    // 上游数据源
    feed: Arc<dyn EarningsFeed>,
    // 过滤器注册表
    filters: Arc<FilterStore>,
}

impl CalendarService {
    pub fn new(feed: Arc<dyn EarningsFeed>, filters: Arc<FilterStore>) -> Arc<Self> {
        Arc::new(Self { feed, filters })
    }

    /// # Summary
    /// 查询指定日期的财报日历，并按过滤器筛选。
    ///
    /// # Logic
    /// 1. 按名称在注册表中解析过滤器；名称未命中时视为未选择过滤器
    ///    （前端可能仍持有已被删除的过滤器名称）。
    /// 2. 向上游拉取该日期的数据。
    /// 3. 解析 `data.rows`，结构缺失时得到空列表。
    /// 4. 有过滤器时只保留 `symbol` 属于其集合的行。
    ///
    /// # Arguments
    /// * `date` - 财报发布日期。
    /// * `filter_name` - 可选的过滤器名称。
    ///
    /// # Returns
    /// * `Result<Vec<CalendarRow>, FetchError>` - 上游故障时返回错误。
    pub async fn query(
        &self,
        date: NaiveDate,
        filter_name: Option<&str>,
    ) -> Result<Vec<CalendarRow>, FetchError> {
        let filter = match filter_name {
            Some(name) => {
                let found = self.filters.find(name).await;
                if found.is_none() {
                    debug!("Filter '{}' not found, returning unfiltered rows", name);
                }
                found
            }
            None => None,
        };

        let raw = self.feed.fetch_calendar(date).await?;
        let rows = EarningsEnvelope::from_value(&raw).into_rows();
        let total = rows.len();

        let rows = match filter {
            Some(filter) => retain_members(rows, &filter),
            None => rows,
        };
        debug!("Calendar query for {}: {} of {} rows kept", date, rows.len(), total);

        Ok(rows)
    }

    /// # Summary
    /// 原样返回上游 JSON，供 `/api` 代理端点使用。
    pub async fn fetch_raw(&self, date: NaiveDate) -> Result<Value, FetchError> {
        self.feed.fetch_calendar(date).await
    }
}

/// 保留 `symbol` 属于过滤器集合的行；空集合不做限制
fn retain_members(rows: Vec<CalendarRow>, filter: &Filter) -> Vec<CalendarRow> {
    if filter.symbols.is_empty() {
        return rows;
    }

    let members: HashSet<&str> = filter.symbols.iter().map(String::as_str).collect();
    rows.into_iter()
        .filter(|row| members.contains(row.symbol.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn row(symbol: &str) -> CalendarRow {
        CalendarRow {
            symbol: symbol.to_string(),
            fields: Map::new(),
        }
    }

    #[test]
    fn test_retain_members_keeps_upstream_order() {
        let filter = Filter::new("tech", ["MSFT", "AAPL"]).unwrap();
        let rows = vec![row("AAPL"), row("GOOG"), row("MSFT"), row("aapl")];

        let kept: Vec<String> = retain_members(rows, &filter)
            .into_iter()
            .map(|r| r.symbol)
            .collect();
        assert_eq!(kept, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_empty_symbol_set_does_not_restrict() {
        // 仓储中的历史数据可能绕过 Filter::new 的校验
        let filter = Filter {
            name: "legacy".to_string(),
            symbols: Vec::new(),
        };
        assert_eq!(retain_members(vec![row("AAPL"), row("GOOG")], &filter).len(), 2);
    }
}
