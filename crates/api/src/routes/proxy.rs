use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::ToSchema;

use earnings_core::common::parse_date;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, ProxyResponse};

#[derive(Deserialize, ToSchema)]
pub struct ProxyQuery {
    pub date: Option<String>,
}

/// 代理上游财报接口
///
/// 原样返回上游 JSON，包装为 `{"data": ...}`，供单页前端直接渲染。
#[utoipa::path(
    get,
    path = "/api",
    tag = "日历 (Calendar)",
    params(
        ("date" = String, Query, description = "财报日期 (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "上游原始响应", body = ProxyResponse),
        (status = 400, description = "日期缺失或格式错误", body = ApiErrorResponse),
        (status = 502, description = "上游服务不可用", body = ApiErrorResponse)
    )
)]
pub async fn proxy_earnings(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Json<ProxyResponse>, ApiError> {
    let raw_date = query
        .date
        .ok_or_else(|| ApiError::BadRequest("缺少 date 参数".to_string()))?;
    let date = parse_date(&raw_date).map_err(ApiError::BadRequest)?;

    let data = state.calendar.fetch_raw(date).await?;
    Ok(Json(ProxyResponse { data }))
}
