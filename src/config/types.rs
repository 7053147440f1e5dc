//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::ObjectStoreLayout;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// metrics API 配置
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// 对象存储配置
    #[serde(default)]
    pub object_store: ObjectStoreConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// metrics API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// metrics 服务基础 URL
    #[serde(default = "default_metrics_url")]
    pub base_url: String,

    /// 请求超时时间（秒），0 表示不设置
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_metrics_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            base_url: default_metrics_url(),
            timeout_secs: 0,
        }
    }
}

/// 对象存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStoreConfig {
    /// 预计算统计 bucket
    #[serde(default = "default_precomputed_stats_url")]
    pub precomputed_stats_url: String,

    /// 到站历史 bucket
    #[serde(default = "default_arrivals_url")]
    pub arrivals_url: String,

    /// 线路列表文档
    #[serde(default = "default_routes_url")]
    pub routes_url: String,

    /// 运营商标识
    #[serde(default = "default_agency")]
    pub agency: String,

    /// 请求超时时间（秒），0 表示不设置
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_precomputed_stats_url() -> String {
    "https://opentransit-precomputed-stats.s3.amazonaws.com".to_string()
}

fn default_arrivals_url() -> String {
    "https://opentransit-stop-arrivals.s3.amazonaws.com".to_string()
}

fn default_routes_url() -> String {
    "https://opentransit-precomputed-stats.s3.amazonaws.com/routes_v2_sf-muni.json.gz".to_string()
}

fn default_agency() -> String {
    "sf-muni".to_string()
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            precomputed_stats_url: default_precomputed_stats_url(),
            arrivals_url: default_arrivals_url(),
            routes_url: default_routes_url(),
            agency: default_agency(),
            timeout_secs: 0,
        }
    }
}

impl ObjectStoreConfig {
    /// 对应的对象存储布局
    pub fn layout(&self) -> ObjectStoreLayout {
        ObjectStoreLayout {
            precomputed_stats_url: self.precomputed_stats_url.clone(),
            arrivals_url: self.arrivals_url.clone(),
            agency: self.agency.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5070);
        assert_eq!(config.metrics.base_url, "http://localhost:5000");
        assert_eq!(config.object_store.agency, "sf-muni");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5070");
    }

    #[test]
    fn test_default_layout_matches_domain_default() {
        let config = ObjectStoreConfig::default();
        assert_eq!(config.layout(), ObjectStoreLayout::default());
    }
}
