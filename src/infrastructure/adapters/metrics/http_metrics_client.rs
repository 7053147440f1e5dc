//! HTTP Metrics Client - 调用 metrics API
//!
//! 实现 MetricsApiPort trait
//!
//! API:
//! GET {base_url}/api/metrics?routeId=..&directionId=..&startStopId=..&endStopId=..&date=..
//! GET {base_url}/api/metrics_by_interval?...
//! 失败时响应体可能为 {"error": "..."}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::infrastructure::adapters::map_reqwest_error;
use crate::application::ports::{FetchError, MetricsApiPort, MetricsEndpoint};
use crate::domain::GraphParams;

/// HTTP Metrics 客户端配置
#[derive(Debug, Clone)]
pub struct HttpMetricsClientConfig {
    /// metrics 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），0 表示使用传输层默认
    pub timeout_secs: u64,
}

impl Default for HttpMetricsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpMetricsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

pub struct HttpMetricsClient {
    client: Client,
    config: HttpMetricsClientConfig,
}

impl HttpMetricsClient {
    pub fn new(config: HttpMetricsClientConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self, endpoint: MetricsEndpoint) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }
}

#[async_trait]
impl MetricsApiPort for HttpMetricsClient {
    async fn fetch(
        &self,
        endpoint: MetricsEndpoint,
        params: &GraphParams,
    ) -> Result<Value, FetchError> {
        let url = self.endpoint_url(endpoint);
        let query = params.query_pairs();

        tracing::debug!(url = %url, query = ?query, "Sending metrics request");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse metrics: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpMetricsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpMetricsClientConfig::new("http://metrics.test:9000").with_timeout(30);
        assert_eq!(config.base_url, "http://metrics.test:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_endpoint_url() {
        let client =
            HttpMetricsClient::new(HttpMetricsClientConfig::new("http://metrics.test/")).unwrap();
        assert_eq!(
            client.endpoint_url(MetricsEndpoint::Metrics),
            "http://metrics.test/api/metrics"
        );
        assert_eq!(
            client.endpoint_url(MetricsEndpoint::MetricsByInterval),
            "http://metrics.test/api/metrics_by_interval"
        );
    }
}
