//! # API 统一错误处理
//!
//! 将下层各 crate 的错误类型统一映射到 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use earnings_core::calendar::error::FetchError;
use earnings_core::filter::error::FilterError;

use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求参数错误 (400)
    #[error("请求参数错误: {0}")]
    BadRequest(String),

    /// 资源冲突 (409)
    #[error("资源冲突: {0}")]
    Conflict(String),

    /// 上游数据源故障 (502)
    #[error("上游服务错误: {0}")]
    BadGateway(String),

    /// 下层业务错误 (500)
    #[error("内部服务错误: {0}")]
    Internal(String),
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::BadGateway(msg) => {
                tracing::warn!("上游服务错误: {}", msg);
                (StatusCode::BAD_GATEWAY, format!("获取财报数据失败: {}", msg))
            }
            ApiError::Internal(msg) => {
                // 内部错误只记录日志，不向客户端透传细节
                tracing::error!("内部服务错误: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "服务器内部错误".to_string(),
                )
            }
        };

        let body = Json(ApiErrorResponse::from_msg(message));
        (status, body).into_response()
    }
}

/// 从 `FilterError` 转换
impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::NameConflict(_) => ApiError::Conflict(err.to_string()),
            FilterError::Validation(msg) => ApiError::BadRequest(msg),
            FilterError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// 从 `FetchError` 转换
impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}
