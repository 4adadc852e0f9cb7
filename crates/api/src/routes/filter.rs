use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use earnings_core::filter::entity::Filter;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{
    ApiErrorResponse, ApiResponse, CreateFilterRequest, DeleteFiltersRequest,
    DeleteFiltersResponse, FilterResponse,
};

/// 获取全部过滤器（存储顺序）
#[utoipa::path(
    get,
    path = "/api/v1/filters",
    tag = "过滤器 (Filter)",
    responses(
        (status = 200, description = "获取成功", body = ApiResponse<Vec<FilterResponse>>)
    )
)]
pub async fn list_filters(State(state): State<AppState>) -> Json<ApiResponse<Vec<FilterResponse>>> {
    let filters = state.filter_store.list().await;
    Json(ApiResponse::ok(
        filters.into_iter().map(FilterResponse::from).collect(),
    ))
}

/// # Summary
/// 新增过滤器。
///
/// # Logic
/// 1. 校验名称与股票代码（去空白、去重）。
/// 2. 名称已存在返回 409。
/// 3. 持久化成功后返回 201 与规范化后的过滤器。
#[utoipa::path(
    post,
    path = "/api/v1/filters",
    tag = "过滤器 (Filter)",
    request_body = CreateFilterRequest,
    responses(
        (status = 201, description = "创建成功", body = ApiResponse<FilterResponse>),
        (status = 400, description = "名称或股票代码为空", body = ApiErrorResponse),
        (status = 409, description = "名称已存在", body = ApiErrorResponse),
        (status = 500, description = "存储故障", body = ApiErrorResponse)
    )
)]
pub async fn create_filter(
    State(state): State<AppState>,
    Json(req): Json<CreateFilterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FilterResponse>>), ApiError> {
    let filter = Filter::new(req.name, req.symbols)?;
    state.filter_store.add(filter.clone()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(filter.into()))))
}

/// 批量删除过滤器，名称去除首尾空白，不存在的名称会被忽略
#[utoipa::path(
    delete,
    path = "/api/v1/filters",
    tag = "过滤器 (Filter)",
    request_body = DeleteFiltersRequest,
    responses(
        (status = 200, description = "删除成功", body = ApiResponse<DeleteFiltersResponse>),
        (status = 400, description = "未选择任何过滤器", body = ApiErrorResponse),
        (status = 500, description = "存储故障", body = ApiErrorResponse)
    )
)]
pub async fn delete_filters(
    State(state): State<AppState>,
    Json(req): Json<DeleteFiltersRequest>,
) -> Result<Json<ApiResponse<DeleteFiltersResponse>>, ApiError> {
    if req.names.iter().all(|name| name.trim().is_empty()) {
        return Err(ApiError::BadRequest("请选择要删除的过滤器".to_string()));
    }

    let outcome = state.filter_store.delete(&req.names).await?;

    Ok(Json(ApiResponse::ok(DeleteFiltersResponse {
        removed: outcome.removed,
        remaining: outcome.remaining,
    })))
}
