//! Fake Object Store - 用于测试
//!
//! 按 URL 返回预设文档或错误，并记录请求过的 URL

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::application::ports::{FetchError, ObjectStorePort};

/// Fake Object Store
///
/// 查找顺序：失败 -> 文档 -> fallback -> 404
pub struct FakeObjectStore {
    documents: DashMap<String, Value>,
    failures: DashMap<String, FetchError>,
    fallback: Option<Value>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            failures: DashMap::new(),
            fallback: None,
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_document(self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    pub fn with_failure(self, url: impl Into<String>, error: FetchError) -> Self {
        self.failures.insert(url.into(), error);
        self
    }

    /// 未登记的 URL 返回该文档
    pub fn with_fallback(mut self, document: Value) -> Self {
        self.fallback = Some(document);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
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

impl Default for FakeObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStorePort for FakeObjectStore {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failures.get(url) {
            return Err(error.value().clone());
        }
        if let Some(document) = self.documents.get(url) {
            return Ok(document.value().clone());
        }
        self.fallback.clone().ok_or_else(|| FetchError::Http {
            status: 404,
            body: "<Error><Code>NoSuchKey</Code></Error>".to_string(),
        })
    }
}
