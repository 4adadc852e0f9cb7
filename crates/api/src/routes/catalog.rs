use axum::Json;
use axum::extract::State;

use crate::server::AppState;
use crate::types::ApiResponse;

/// 获取股票代码清单（CSV 文件顺序）
#[utoipa::path(
    get,
    path = "/api/v1/catalog/symbols",
    tag = "股票清单 (Catalog)",
    responses(
        (status = 200, description = "获取成功", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn list_symbols(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::ok(state.catalog.symbols().to_vec()))
}
