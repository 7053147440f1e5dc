//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `OPENTRANSIT_SERVER__PORT=8080`
/// - `OPENTRANSIT_METRICS__BASE_URL=http://metrics:5000`
/// - `OPENTRANSIT_OBJECT_STORE__AGENCY=sf-muni`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索当前目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("metrics.base_url", "http://localhost:5000")?
        .set_default("metrics.timeout_secs", 0)?
        .set_default(
            "object_store.precomputed_stats_url",
            "https://opentransit-precomputed-stats.s3.amazonaws.com",
        )?
        .set_default(
            "object_store.arrivals_url",
            "https://opentransit-stop-arrivals.s3.amazonaws.com",
        )?
        .set_default(
            "object_store.routes_url",
            "https://opentransit-precomputed-stats.s3.amazonaws.com/routes_v2_sf-muni.json.gz",
        )?
        .set_default("object_store.agency", "sf-muni")?
        .set_default("object_store.timeout_secs", 0)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: OPENTRANSIT_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("OPENTRANSIT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.metrics.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Metrics base URL cannot be empty".to_string(),
        ));
    }

    let store = &config.object_store;
    for (name, url) in [
        ("precomputed_stats_url", &store.precomputed_stats_url),
        ("arrivals_url", &store.arrivals_url),
        ("routes_url", &store.routes_url),
    ] {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Object store {} cannot be empty",
                name
            )));
        }
    }

    if store.agency.is_empty() {
        return Err(ConfigError::ValidationError(
            "Agency cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Metrics API: {}", config.metrics.base_url);
    if config.metrics.timeout_secs > 0 {
        tracing::info!("Metrics Timeout: {}s", config.metrics.timeout_secs);
    }
    tracing::info!("Precomputed Stats: {}", config.object_store.precomputed_stats_url);
    tracing::info!("Arrivals: {}", config.object_store.arrivals_url);
    tracing::info!("Routes: {}", config.object_store.routes_url);
    tracing::info!("Agency: {}", config.object_store.agency);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
