use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::ToSchema;

use earnings_core::calendar::entity::CalendarRow;
use earnings_core::common::parse_date;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, ApiResponse, CalendarRowSchema};

#[derive(Deserialize, ToSchema)]
pub struct CalendarQuery {
    pub date: Option<String>,
    pub filter: Option<String>,
}

/// # Summary
/// 按日期查询财报日历，可选按过滤器筛选。
///
/// # Logic
/// 1. `date` 缺省时取时钟的当天日期。
/// 2. `filter` 为空字符串视为未指定。
/// 3. 未知的过滤器名称不做筛选，返回全部行。
#[utoipa::path(
    get,
    path = "/api/v1/calendar",
    tag = "日历 (Calendar)",
    params(
        ("date" = Option<String>, Query, description = "财报日期 (YYYY-MM-DD)，缺省为今天"),
        ("filter" = Option<String>, Query, description = "过滤器名称")
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<Vec<CalendarRowSchema>>),
        (status = 400, description = "日期格式错误", body = ApiErrorResponse),
        (status = 502, description = "上游服务不可用", body = ApiErrorResponse)
    )
)]
pub async fn query_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<ApiResponse<Vec<CalendarRow>>>, ApiError> {
    let date = match query.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_date(raw).map_err(ApiError::BadRequest)?,
        _ => state.clock.today(),
    };
    let filter = query
        .filter
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let rows = state.calendar.query(date, filter).await?;
    Ok(Json(ApiResponse::ok(rows)))
}
