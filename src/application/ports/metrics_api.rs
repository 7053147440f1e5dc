//! Metrics API Port - 指标查询服务抽象
//!
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde_json::Value;

use super::FetchError;
use crate::domain::GraphParams;

/// Metrics API 端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsEndpoint {
    /// 汇总指标
    Metrics,
    /// 按时间段拆分的指标
    MetricsByInterval,
}

impl MetricsEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            MetricsEndpoint::Metrics => "/api/metrics",
            MetricsEndpoint::MetricsByInterval => "/api/metrics_by_interval",
        }
    }
}

#[async_trait]
pub trait MetricsApiPort: Send + Sync {
    /// 以 GraphParams 为 query 参数请求端点，返回原始响应体
    async fn fetch(&self, endpoint: MetricsEndpoint, params: &GraphParams)
        -> Result<Value, FetchError>;
}
