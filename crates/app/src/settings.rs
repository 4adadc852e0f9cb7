use config::{Config, ConfigError, Environment, File};
use earnings_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// 环境变量前缀，例如 `EARNINGS__SERVER__PORT=9000`
const ENV_PREFIX: &str = "EARNINGS";
const ENV_SEPARATOR: &str = "__";
/// 指向额外配置文件的环境变量
const CONFIG_PATH_VAR: &str = "EARNINGS_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/default";

/// # Summary
/// 加载应用配置。
///
/// # Logic
/// 按优先级从低到高合并：
/// 1. 内置默认值。
/// 2. `config/default.toml`（可选）。
/// 3. `EARNINGS_CONFIG` 指向的文件（可选，若设置则必须存在）。
/// 4. `EARNINGS__` 前缀的环境变量。
pub fn load() -> Result<AppConfig, ConfigError> {
    let extra = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    build(extra.as_deref(), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn build(extra: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

    if let Some(path) = extra {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder.add_source(env).build()?.try_deserialize()
}
