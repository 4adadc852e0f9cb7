use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_PREFIX: &str = "earnings.log";

/// # Summary
/// 初始化全局日志。
///
/// # Logic
/// 1. 级别取 `RUST_LOG`，缺省为 `info`。
/// 2. 始终输出到终端。
/// 3. 配置了 `dir` 时额外按天滚动写入文件。
///
/// # Returns
/// * `Option<WorkerGuard>` - 文件写入器的守卫，需持有到进程退出，否则缓冲日志会丢失。
pub fn init(dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}
