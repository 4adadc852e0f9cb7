mod logging;
mod settings;

use std::sync::Arc;

use earnings_api::server::{AppState, start_server};
use earnings_catalog::SymbolCatalog;
use earnings_core::common::time::RealTimeProvider;
use earnings_feed::NasdaqProvider;
use earnings_manager::calendar::CalendarService;
use earnings_manager::filter::FilterStore;
use earnings_store::SqliteFilterRepository;
use tracing::{error, info};

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到应用服务层。
///
/// # Logic
/// 1. 加载配置并初始化全局日志。
/// 2. 实例化基础设施层（Feed、Store、Catalog）。
/// 3. 构造应用服务层（FilterStore、CalendarService）。
/// 4. 启动 HTTP 服务，收到退出信号后优雅关闭。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    let config = settings::load()?;
    let _log_guard = logging::init(config.log.dir.as_deref());
    info!("Earnings calendar starting...");

    // 2. 实例化基础设施层
    let feed = Arc::new(NasdaqProvider::new(&config.feed)?);
    let repository = Arc::new(
        SqliteFilterRepository::open(&config.storage.data_dir, config.storage.namespace.clone())
            .await?,
    );
    // 清单加载失败不影响启动，只是新增过滤器时没有可选代码
    let catalog = match SymbolCatalog::load(&config.catalog.path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load symbol catalog {}: {}", config.catalog.path, e);
            SymbolCatalog::empty()
        }
    };

    // 3. 构造应用服务层
    let filter_store = FilterStore::load(repository).await?;
    let calendar = CalendarService::new(feed, filter_store.clone());

    let state = AppState {
        filter_store,
        calendar,
        catalog: Arc::new(catalog),
        clock: Arc::new(RealTimeProvider),
    };

    // 4. 启动服务，挂起直到外部退出信号
    start_server(state, &config.server.bind_addr(), shutdown_signal()).await?;
    info!("Shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received. Exiting...");
}
