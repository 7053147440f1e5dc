//! Metrics Adapter - metrics API 客户端实现

mod fake_metrics_client;
mod http_metrics_client;

pub use fake_metrics_client::FakeMetricsApi;
pub use http_metrics_client::*;
