//! Fake Metrics API - 用于测试
//!
//! 按端点返回预设结果，并记录收到的请求

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::application::ports::{FetchError, MetricsApiPort, MetricsEndpoint};
use crate::domain::GraphParams;

/// Fake Metrics API
///
/// 未配置的端点返回 `{}`
pub struct FakeMetricsApi {
    responses: DashMap<MetricsEndpoint, Result<Value, FetchError>>,
    requests: Mutex<Vec<(MetricsEndpoint, GraphParams)>>,
    delay: Option<Duration>,
}

impl FakeMetricsApi {
    pub fn new() -> Self {
        Self {
            responses: DashMap::new(),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_response(self, endpoint: MetricsEndpoint, response: Result<Value, FetchError>) -> Self {
        self.responses.insert(endpoint, response);
        self
    }

    /// 每次请求前等待
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<(MetricsEndpoint, GraphParams)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for FakeMetricsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsApiPort for FakeMetricsApi {
    async fn fetch(
        &self,
        endpoint: MetricsEndpoint,
        params: &GraphParams,
    ) -> Result<Value, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((endpoint, params.clone()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .get(&endpoint)
            .map(|r| r.value().clone())
            .unwrap_or_else(|| Ok(json!({})))
    }
}
