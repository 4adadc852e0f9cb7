//! # `earnings-api` - HTTP API 网关
//!
//! 本 crate 是财报日历服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 代理上游财报接口 (`GET /api?date=`)，供单页前端使用
//! - 管理自定义过滤器（列表、新增、删除）
//! - 按日期与过滤器查询财报日历
//! - 提供股票代码清单与单页前端
//! - 将领域模型转换为 DTO 返回给前端

pub mod types;
pub mod error;
pub mod routes;
pub mod server;
