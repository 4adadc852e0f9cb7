//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向前端 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ============================================================
//  过滤器相关 DTO
// ============================================================

/// 过滤器 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterResponse {
    /// 过滤器名称
    #[schema(example = "tech")]
    pub name: String,
    /// 关注的股票代码（录入顺序）
    #[schema(example = json!(["AAPL", "MSFT"]))]
    pub symbols: Vec<String>,
}

/// 新增过滤器请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFilterRequest {
    /// 过滤器名称，不能与已有过滤器重名
    #[schema(example = "tech")]
    pub name: String,
    /// 关注的股票代码，至少一个
    #[schema(example = json!(["AAPL", "MSFT"]))]
    pub symbols: Vec<String>,
}

/// 删除过滤器请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteFiltersRequest {
    /// 待删除的过滤器名称，不存在的名称会被忽略
    #[schema(example = json!(["tech"]))]
    pub names: Vec<String>,
}

/// 删除结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteFiltersResponse {
    /// 实际删除的数量
    #[schema(example = 1)]
    pub removed: usize,
    /// 剩余的过滤器数量
    #[schema(example = 2)]
    pub remaining: usize,
}

// ============================================================
//  日历相关 DTO
// ============================================================

/// 财报日历行（仅用于文档）
///
/// 实际响应原样透传上游的全部字段，这里列出前端表格使用的列。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRowSchema {
    /// 股票代码
    #[schema(example = "AAPL")]
    pub symbol: String,
    /// 公司名称
    #[schema(example = "Apple Inc.")]
    pub name: Option<String>,
    /// 市值
    #[schema(example = "$2,818,277,093,480")]
    pub market_cap: Option<String>,
    /// 发布时段
    #[schema(example = "time-after-hours")]
    pub time: Option<String>,
}

/// `/api` 代理响应：`data` 为上游原始 JSON
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProxyResponse {
    #[schema(value_type = Object)]
    pub data: Value,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 统一 API 响应包装器
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// 是否成功
    pub success: bool,
    /// 数据载荷 (成功时)
    pub data: Option<T>,
    /// 错误信息 (失败时)
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 构建成功响应
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// 构建失败响应 (不含泛型载荷)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// ============================================================
//  领域模型 → DTO 惯用转换 (impl From<T>)
// ============================================================

impl From<earnings_core::filter::entity::Filter> for FilterResponse {
    fn from(f: earnings_core::filter::entity::Filter) -> Self {
        Self {
            name: f.name,
            symbols: f.symbols,
        }
    }
}
