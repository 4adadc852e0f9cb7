//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 与请求日志并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 的 DI 容器持有并调用。

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use earnings_catalog::SymbolCatalog;
use earnings_core::common::time::TimeProvider;
use earnings_manager::calendar::CalendarService;
use earnings_manager::filter::FilterStore;

use crate::routes::{calendar, catalog, filter, proxy, ui};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 所有字段在服务启动前由 DI 容器注入，生命周期与进程等同。
#[derive(Clone)]
pub struct AppState {
    /// 过滤器注册表
    pub filter_store: Arc<FilterStore>,
    /// 财报日历查询服务
    pub calendar: Arc<CalendarService>,
    /// 启动时加载的股票代码清单
    pub catalog: Arc<SymbolCatalog>,
    /// 时钟 (用于缺省查询日期)
    pub clock: Arc<dyn TimeProvider>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "财报日历 API",
        version = "0.1.0",
        description = "按日期查询纳斯达克财报日历，并通过自定义过滤器只查看关注的股票。",
        license(name = "MIT")
    ),
    tags(
        (name = "日历 (Calendar)", description = "财报日历查询与上游代理"),
        (name = "过滤器 (Filter)", description = "自定义过滤器的列表、新增与删除"),
        (name = "股票清单 (Catalog)", description = "可选股票代码")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// # Summary
/// 构建完整的 axum 应用路由树。
///
/// # Logic
/// 1. 注册所有 REST 路由并自动收集 OpenAPI 文档。
/// 2. 合并 Swagger UI 与单页前端。
/// 3. 应用 CORS 与请求追踪中间件。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(proxy::proxy_earnings))
        .routes(routes!(calendar::query_calendar))
        .routes(routes!(filter::list_filters, filter::create_filter, filter::delete_filters))
        .routes(routes!(catalog::list_symbols))
        .with_state(state)
        .split_for_parts();

    // 单页前端由同源提供，CORS 仅方便本地调试
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .route("/", get(ui::index))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 绑定端口并启动 HTTP 监听，`shutdown` 完成后优雅退出。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8080"`
/// * `shutdown` - 退出信号
pub async fn start_server<F>(
    state: AppState,
    bind_addr: &str,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("🚀 Earnings API Server listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
